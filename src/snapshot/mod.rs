//! Serializable render snapshots of a form.
//!
//! A snapshot carries everything an adapter needs to render a form (field
//! validity, rule breakdowns, readiness) without the raw field values,
//! which may be passwords. It lets the presentation layer sit across a
//! JSON or binary boundary from the validator.
//!
//! Snapshots may arrive late or twice on the far side of that boundary.
//! [`SnapshotReceiver`] renders only the newest one it has seen, using each
//! snapshot's `id` and `taken_at`.

use crate::binding::{BindingAdapter, FieldView};
use crate::core::{Readiness, RuleOutcome, Validity};
use crate::form::FormState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Render state of one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub name: String,
    pub validity: Validity,
    /// Whether the field has received input since the last reset
    pub touched: bool,
    pub rule_results: Vec<RuleOutcome>,
}

impl From<&FieldSnapshot> for FieldView {
    fn from(field: &FieldSnapshot) -> Self {
        Self {
            name: field.name.clone(),
            validity: field.validity,
            rule_results: field.rule_results.clone(),
        }
    }
}

/// Serializable render state of a whole form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Identifies one capture, so a redelivered snapshot can be dropped
    pub id: Uuid,

    /// Capture time, used to drop snapshots that arrive out of order
    pub taken_at: DateTime<Utc>,

    pub form: String,

    pub readiness: Readiness,

    /// Fields in registration order
    pub fields: Vec<FieldSnapshot>,
}

impl FormSnapshot {
    /// Capture the current render state of `form`.
    pub fn capture(form: &FormState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            form: form.name().to_string(),
            readiness: form.readiness(),
            fields: form
                .fields()
                .iter()
                .map(|field| FieldSnapshot {
                    name: field.name().to_string(),
                    validity: field.validity(),
                    touched: field.is_touched(),
                    rule_results: field.rule_results().to_vec(),
                })
                .collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSnapshot> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str::<Self>(json)?.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize::<Self>(bytes)?.check_version()
    }

    /// Render every field and the submit control through `adapter`.
    pub fn render<A: BindingAdapter>(&self, adapter: &mut A) {
        for field in &self.fields {
            adapter.render_field(&FieldView::from(field));
        }
        adapter.set_submit_enabled(self.readiness == Readiness::Ready);
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

/// Renders the snapshots of one form as they arrive, skipping stale and
/// repeated ones.
pub struct SnapshotReceiver<A: BindingAdapter> {
    form: String,
    latest: Option<(Uuid, DateTime<Utc>)>,
    adapter: A,
}

impl<A: BindingAdapter> SnapshotReceiver<A> {
    pub fn new(form: impl Into<String>, adapter: A) -> Self {
        Self {
            form: form.into(),
            latest: None,
            adapter,
        }
    }

    /// Render `snapshot` if it is newer than everything received so far.
    ///
    /// Returns whether it was rendered. A snapshot of another form is an
    /// error.
    pub fn receive(&mut self, snapshot: &FormSnapshot) -> Result<bool, SnapshotError> {
        if snapshot.form != self.form {
            tracing::error!(expected = %self.form, found = %snapshot.form, "snapshot for another form");
            return Err(SnapshotError::WrongForm {
                expected: self.form.clone(),
                found: snapshot.form.clone(),
            });
        }

        if let Some((id, taken_at)) = self.latest {
            if snapshot.id == id || snapshot.taken_at < taken_at {
                tracing::trace!(form = %self.form, id = %snapshot.id, "snapshot skipped");
                return Ok(false);
            }
        }

        snapshot.render(&mut self.adapter);
        self.latest = Some((snapshot.id, snapshot.taken_at));
        tracing::trace!(form = %self.form, id = %snapshot.id, "snapshot rendered");
        Ok(true)
    }

    /// Decode a JSON snapshot and [`receive`](Self::receive) it.
    pub fn receive_json(&mut self, json: &str) -> Result<bool, SnapshotError> {
        let snapshot = FormSnapshot::from_json(json)?;
        self.receive(&snapshot)
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }
}
