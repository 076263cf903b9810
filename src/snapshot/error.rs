use thiserror::Error;

/// Failure to move a snapshot across an encoding boundary or apply it.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Snapshot format version {found} cannot be read; this build reads version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A receiver only renders snapshots of the form it was opened for.
    #[error("Snapshot of form '{found}' sent to the receiver for form '{expected}'")]
    WrongForm { expected: String, found: String },
}
