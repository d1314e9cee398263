//! Avro-style schema intermediate representation.

mod format;
mod node;

pub use format::format_schema_node;
pub use node::{RecordField, SchemaNode};
