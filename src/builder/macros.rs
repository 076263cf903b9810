//! Macros for ergonomic form construction.

/// Build a form from a compact field/rule listing.
///
/// Each rule is a [`FieldBuilder`](crate::builder::FieldBuilder) method
/// call. Expands to [`FormBuilder::build`](crate::builder::FormBuilder::build)
/// and returns its `Result`.
///
/// # Example
///
/// ```
/// use formcheck::form;
///
/// let form = form! {
///     "registration" => {
///         username: [min_length(3)],
///         password: [min_length(8), mixed_case(), digit(), special_char()],
///         confirm: [equals_field("password"), min_length(8)],
///     }
/// }
/// .unwrap();
///
/// assert_eq!(form.fields().len(), 3);
/// ```
#[macro_export]
macro_rules! form {
    (
        $name:expr => {
            $(
                $field:ident : [ $( $rule:ident ( $($arg:expr),* ) ),* $(,)? ]
            ),* $(,)?
        }
    ) => {
        $crate::builder::FormBuilder::new($name)
            $(
                .field(
                    $crate::builder::FieldBuilder::new(stringify!($field))
                        $( .$rule($($arg),*) )*
                )
            )*
            .build()
    };
}
