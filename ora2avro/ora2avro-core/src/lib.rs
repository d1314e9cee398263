//! Database-agnostic core types for `ora2avro`.
//!
//! This crate provides the Avro schema intermediate representation
//! ([`SchemaNode`]) and the field-type model ([`FieldType`]) that
//! database-specific translators build their output from.

mod error;
mod field_type;
mod metadata;
mod schema;

pub use error::SchemaError;
pub use field_type::{
    AvroPrimitive, CollectionType, FieldType, NumericBounds, PrimitiveType, StructType,
};
pub use metadata::{FIELD_TYPE_NAME, Metadata, PRECISION, SCALE};
pub use schema::{RecordField, SchemaNode, format_schema_node};
