//! Macros for field definitions
//!
//! This module provides a macro to reduce boilerplate when declaring a form schema.

/// Macro to create a form schema from field declarations
///
/// Each field names its key, label and type. Categorical fields declare
/// their options either as a `{ label => code }` mapping or as a plain
/// `[code, ...]` sequence. The macro evaluates to `Result<Schema>`.
///
/// # Example
///
/// ```rust
/// use heart_risk::form_schema;
///
/// let schema = form_schema! {
///     name: "example",
///     fields: [
///         { key: "date", label: "Date of birth", type: Date },
///         { key: "gender", label: "Gender", type: Categorical, options: { "male" => 0, "female" => 1 } },
///         { key: "ca", label: "Vessels", type: Categorical, options: [0, 1, 2, 3] },
///         { key: "chol", label: "Serum cholesterol (mg/dl)", type: Numerical },
///     ]
/// }
/// .unwrap();
///
/// assert_eq!(schema.len(), 4);
/// ```
#[macro_export]
macro_rules! form_schema {
    (@descriptor $label:expr, $field_type:ident) => {
        $crate::schema::FieldDescriptor::new($label, $crate::schema::FieldType::$field_type, None)
    };
    (@descriptor $label:expr, $field_type:ident, { $($option:expr => $code:expr),* $(,)? }) => {
        $crate::schema::FieldDescriptor::new(
            $label,
            $crate::schema::FieldType::$field_type,
            Some($crate::schema::CategoryOptions::Mapping(vec![
                $( (::std::string::String::from($option), $code) ),*
            ])),
        )
    };
    (@descriptor $label:expr, $field_type:ident, [ $($code:expr),* $(,)? ]) => {
        $crate::schema::FieldDescriptor::new(
            $label,
            $crate::schema::FieldType::$field_type,
            Some($crate::schema::CategoryOptions::Sequence(vec![$($code),*])),
        )
    };
    (
        name: $name:expr,
        fields: [
            $(
                {
                    key: $key:expr,
                    label: $label:expr,
                    type: $field_type:ident
                    $(, options: $options:tt)?
                    $(,)?
                }
            ),* $(,)?
        ]
    ) => {
        $crate::schema::Schema::try_from_fields(
            $name,
            vec![
                $(
                    ($key, $crate::form_schema!(@descriptor $label, $field_type $(, $options)?))
                ),*
            ],
        )
    };
}
