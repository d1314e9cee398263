//! Error types for field-type construction and translation.

/// Error raised while building a [`FieldType`](crate::FieldType) tree.
///
/// All variants are structural validation failures detected at construction
/// time. None of them are recoverable mid-structure: the caller is expected to
/// abandon translation of the enclosing descriptor tree on the first error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No mapping rule exists for the given source database type name.
    /// Unknown types are never approximated.
    #[error("unsupported source type '{type_name}'")]
    UnsupportedSourceType { type_name: String },

    /// The descriptor shape is structurally invalid (e.g., a collection
    /// declaring zero or more than one element type, or a struct with no
    /// fields).
    #[error("invalid type structure: {detail}")]
    InvalidTypeStructure { detail: String },

    /// A struct type declares the same field name more than once.
    #[error("duplicate field name '{field}' in type '{type_name}'")]
    DuplicateFieldName { type_name: String, field: String },

    /// The recursion guard tripped while walking a descriptor tree.
    /// Database type systems forbid self-referential definitions, so this
    /// indicates malformed catalog metadata rather than a legitimate schema.
    #[error("type nesting exceeds the configured depth limit of {limit}")]
    TypeDepthExceeded { limit: usize },
}
