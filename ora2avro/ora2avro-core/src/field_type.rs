//! Field-type model: the closed variant set over primitive, struct, and
//! collection database types.
//!
//! Using Oracle as an example, a column can store three kinds of data:
//!
//! 1. Simple primitive types — CHAR, VARCHAR2, TIMESTAMP and friends,
//!    modeled by [`PrimitiveType`].
//! 2. Struct types — developer-defined composite types, a table within a
//!    table. A column `settings` might store a type `SETTING` whose child
//!    fields are themselves primitives or further structs. Modeled by
//!    [`StructType`].
//! 3. Collection types — an associative array stored in a single column.
//!    Database collections adhere to strict typing: a collection has exactly
//!    one element type, which may itself be a primitive, struct, or another
//!    collection. Modeled by [`CollectionType`].
//!
//! Every consumer matches exhaustively over [`FieldType`], so a missed kind
//! is a compile error rather than a runtime surprise.

use crate::{
    error::SchemaError,
    metadata::Metadata,
    schema::{RecordField, SchemaNode},
};

/// Closed Avro primitive keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvroPrimitive {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
}

impl AvroPrimitive {
    pub fn keyword(self) -> &'static str {
        match self {
            AvroPrimitive::Null => "null",
            AvroPrimitive::Boolean => "boolean",
            AvroPrimitive::Int => "int",
            AvroPrimitive::Long => "long",
            AvroPrimitive::Float => "float",
            AvroPrimitive::Double => "double",
            AvroPrimitive::Bytes => "bytes",
            AvroPrimitive::String => "string",
        }
    }
}

/// Precision and scale of a fixed-precision numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericBounds {
    pub precision: u32,
    /// Oracle allows negative scale (rounding left of the decimal point).
    pub scale: i32,
}

/// A scalar database column type with no substructure.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveType {
    db_type_name: String,
    avro: AvroPrimitive,
    numeric: Option<NumericBounds>,
}

impl PrimitiveType {
    /// Builds a primitive from an already-resolved Avro keyword. Resolution
    /// from source type names lives with the database-specific translator;
    /// see `ora2avro-oracle`.
    pub fn new(db_type_name: impl Into<String>, avro: AvroPrimitive) -> Self {
        Self {
            db_type_name: db_type_name.into(),
            avro,
            numeric: None,
        }
    }

    /// Builds a fixed-precision numeric primitive; precision and scale are
    /// carried in the metadata.
    pub fn numeric(
        db_type_name: impl Into<String>,
        avro: AvroPrimitive,
        bounds: NumericBounds,
    ) -> Self {
        Self {
            db_type_name: db_type_name.into(),
            avro,
            numeric: Some(bounds),
        }
    }

    pub fn avro_primitive(&self) -> AvroPrimitive {
        self.avro
    }

    pub fn numeric_bounds(&self) -> Option<NumericBounds> {
        self.numeric
    }
}

/// A database-defined composite type with named, ordered fields.
///
/// Field order is preserved into the emitted record schema. Field names are
/// unique within the struct, and the field list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    db_type_name: String,
    fields: Vec<(String, FieldType)>,
}

impl StructType {
    pub fn new(
        db_type_name: impl Into<String>,
        fields: Vec<(String, FieldType)>,
    ) -> Result<Self, SchemaError> {
        let db_type_name = db_type_name.into();
        if fields.is_empty() {
            return Err(SchemaError::InvalidTypeStructure {
                detail: format!("struct type '{db_type_name}' declares no fields"),
            });
        }
        for (i, (name, _)) in fields.iter().enumerate() {
            if fields[..i].iter().any(|(seen, _)| seen == name) {
                return Err(SchemaError::DuplicateFieldName {
                    type_name: db_type_name,
                    field: name.clone(),
                });
            }
        }
        Ok(Self {
            db_type_name,
            fields,
        })
    }

    pub fn fields(&self) -> &[(String, FieldType)] {
        &self.fields
    }
}

/// A database-defined homogeneous collection with exactly one element type.
///
/// The element type is set exactly once at construction and never reassigned;
/// heterogeneous collections are not representable.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionType {
    db_type_name: String,
    element: Box<FieldType>,
}

impl CollectionType {
    /// Builds a collection from its declared element types. Anything other
    /// than exactly one declared element type is a structural error.
    pub fn new(
        db_type_name: impl Into<String>,
        mut elements: Vec<FieldType>,
    ) -> Result<Self, SchemaError> {
        let db_type_name = db_type_name.into();
        if elements.len() != 1 {
            return Err(SchemaError::InvalidTypeStructure {
                detail: format!(
                    "collection type '{db_type_name}' declares {} element types, expected exactly 1",
                    elements.len()
                ),
            });
        }
        let element = elements.remove(0);
        Ok(Self {
            db_type_name,
            element: Box::new(element),
        })
    }

    pub fn element(&self) -> &FieldType {
        &self.element
    }
}

/// A database column type, translated: primitive, struct, or collection.
///
/// Nodes are built bottom-up from leaf primitives toward enclosing structs
/// and collections, and are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Primitive(PrimitiveType),
    Struct(StructType),
    Collection(CollectionType),
}

impl FieldType {
    /// The Avro schema keyword for this type: the mapped primitive keyword,
    /// `"record"` for structs, `"array"` for collections. Never empty.
    pub fn schema_name(&self) -> &str {
        match self {
            FieldType::Primitive(p) => p.avro.keyword(),
            FieldType::Struct(_) => "record",
            FieldType::Collection(_) => "array",
        }
    }

    /// The verbatim source database type name, e.g. `VARCHAR2` or `SETTING`.
    pub fn field_type_name(&self) -> &str {
        match self {
            FieldType::Primitive(p) => &p.db_type_name,
            FieldType::Struct(s) => &s.db_type_name,
            FieldType::Collection(c) => &c.db_type_name,
        }
    }

    /// The Avro field category: a primitive keyword, `"record"`, or `"array"`.
    pub fn avro_field_name(&self) -> &str {
        self.schema_name()
    }

    /// Builds the Avro schema fragment for this type.
    ///
    /// Primitives yield a scalar node. Structs yield a record node whose
    /// named children appear in construction order. Collections yield an
    /// array node wrapping the single element schema.
    pub fn to_avro(&self) -> SchemaNode {
        match self {
            FieldType::Primitive(p) => SchemaNode::scalar(p.avro.keyword()),
            FieldType::Struct(s) => SchemaNode::Record {
                name: s.db_type_name.clone(),
                fields: s
                    .fields
                    .iter()
                    .map(|(name, child)| RecordField::new(name.clone(), child.to_avro()))
                    .collect(),
            },
            FieldType::Collection(c) => SchemaNode::Array {
                items: Box::new(c.element.to_avro()),
            },
        }
    }

    /// Builds the schema fragment for a nullable column: a union of `"null"`
    /// and this type's schema.
    pub fn to_avro_nullable(&self) -> SchemaNode {
        SchemaNode::Union(vec![
            SchemaNode::scalar(AvroPrimitive::Null.keyword()),
            self.to_avro(),
        ])
    }

    /// The metadata map for this node. Always contains the source type name
    /// under [`FIELD_TYPE_NAME`](crate::FIELD_TYPE_NAME); fixed-precision
    /// numeric primitives also carry precision and scale.
    pub fn metadata(&self) -> Metadata {
        match self {
            FieldType::Primitive(p) => match p.numeric {
                Some(bounds) => {
                    Metadata::for_numeric(&p.db_type_name, bounds.precision, bounds.scale)
                }
                None => Metadata::for_type(&p.db_type_name),
            },
            FieldType::Struct(s) => Metadata::for_type(&s.db_type_name),
            FieldType::Collection(c) => Metadata::for_type(&c.db_type_name),
        }
    }
}
