use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::{Map, Value, json};

/// Recursive Avro schema fragment produced for a field type.
///
/// Either a scalar type keyword, or a composite node (record, array, union)
/// holding nested schema nodes. The tree is immutable once built; composite
/// nodes exclusively own their children.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A scalar Avro type keyword such as `"string"` or `"long"`.
    Scalar(String),
    /// A named record with ordered fields. Field order is preserved into the
    /// emitted schema.
    Record {
        name: String,
        fields: Vec<RecordField>,
    },
    /// A homogeneous array wrapping a single element schema.
    Array { items: Box<SchemaNode> },
    /// An ordered union of schema branches, e.g. `["null", "string"]`.
    Union(Vec<SchemaNode>),
}

/// A named entry of a [`SchemaNode::Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub node: SchemaNode,
}

impl RecordField {
    pub fn new(name: impl Into<String>, node: SchemaNode) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}

impl SchemaNode {
    pub fn scalar(keyword: impl Into<String>) -> Self {
        Self::Scalar(keyword.into())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, SchemaNode::Scalar(_))
    }

    /// The kind tag of this node: the scalar keyword itself, or one of
    /// `"record"`, `"array"`, `"union"`.
    pub fn kind_name(&self) -> &str {
        match self {
            SchemaNode::Scalar(keyword) => keyword,
            SchemaNode::Record { .. } => "record",
            SchemaNode::Array { .. } => "array",
            SchemaNode::Union(_) => "union",
        }
    }

    /// Renders this node as Avro schema JSON.
    pub fn to_json(&self) -> Value {
        match self {
            SchemaNode::Scalar(keyword) => Value::String(keyword.clone()),
            SchemaNode::Record { name, fields } => {
                let fields: Vec<Value> = fields
                    .iter()
                    .map(|f| {
                        let mut entry = Map::new();
                        entry.insert("name".to_string(), Value::String(f.name.clone()));
                        entry.insert("type".to_string(), f.node.to_json());
                        Value::Object(entry)
                    })
                    .collect();
                json!({
                    "type": "record",
                    "name": name,
                    "fields": fields,
                })
            }
            SchemaNode::Array { items } => json!({
                "type": "array",
                "items": items.to_json(),
            }),
            SchemaNode::Union(branches) => {
                Value::Array(branches.iter().map(SchemaNode::to_json).collect())
            }
        }
    }
}

impl Display for SchemaNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let text = super::format_schema_node(self)?;
        f.write_str(&text)
    }
}
