//! Raw Oracle type descriptors as supplied by a catalog-reading collaborator.

/// A source database type descriptor: the input boundary of translation.
///
/// Descriptors mirror what the catalog reports for a column type, before any
/// validation. A collection descriptor carries a *list* of declared element
/// types so that malformed catalog metadata (zero or several element types)
/// is representable here and rejected during translation. The descriptor
/// graph is acyclic by domain constraint: database type systems forbid
/// self-referential struct definitions.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    Primitive {
        type_name: String,
        precision: Option<u32>,
        scale: Option<i32>,
    },
    Struct {
        type_name: String,
        /// Ordered `(field name, field type)` pairs.
        fields: Vec<(String, TypeDescriptor)>,
    },
    Collection {
        type_name: String,
        elements: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn primitive(type_name: impl Into<String>) -> Self {
        Self::Primitive {
            type_name: type_name.into(),
            precision: None,
            scale: None,
        }
    }

    pub fn numeric(type_name: impl Into<String>, precision: u32, scale: i32) -> Self {
        Self::Primitive {
            type_name: type_name.into(),
            precision: Some(precision),
            scale: Some(scale),
        }
    }

    pub fn structure(
        type_name: impl Into<String>,
        fields: Vec<(impl Into<String>, TypeDescriptor)>,
    ) -> Self {
        Self::Struct {
            type_name: type_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, desc)| (name.into(), desc))
                .collect(),
        }
    }

    pub fn collection(type_name: impl Into<String>, elements: Vec<TypeDescriptor>) -> Self {
        Self::Collection {
            type_name: type_name.into(),
            elements,
        }
    }

    /// The source type name as reported by the catalog.
    pub fn type_name(&self) -> &str {
        match self {
            TypeDescriptor::Primitive { type_name, .. }
            | TypeDescriptor::Struct { type_name, .. }
            | TypeDescriptor::Collection { type_name, .. } => type_name,
        }
    }
}
