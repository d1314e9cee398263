//! Field metadata: database-specific descriptive data that has no analog in
//! the Avro type system, serialized as `key=value;` pairs.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::SchemaError;

/// Metadata key for the source database type name. Present on every node.
pub const FIELD_TYPE_NAME: &str = "dbFieldType";

/// Metadata key for the precision of fixed-precision numeric fields.
pub const PRECISION: &str = "numberPrecision";

/// Metadata key for the scale of fixed-precision numeric fields.
pub const SCALE: &str = "numberScale";

/// Ordered key→value metadata attached to a field-type node.
///
/// Serializes via [`Display`] and parses back via [`FromStr`] without losing
/// keys or values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Metadata for a non-numeric node: just the source type name.
    pub fn for_type(db_type_name: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(FIELD_TYPE_NAME.to_string(), db_type_name.to_string());
        Self(map)
    }

    /// Metadata for a fixed-precision numeric node.
    pub fn for_numeric(db_type_name: &str, precision: u32, scale: i32) -> Self {
        let mut meta = Self::for_type(db_type_name);
        meta.0.insert(PRECISION.to_string(), precision.to_string());
        meta.0.insert(SCALE.to_string(), scale.to_string());
        meta
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (key, value) in &self.0 {
            write!(f, "{key}={value};")?;
        }
        Ok(())
    }
}

impl FromStr for Metadata {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = BTreeMap::new();
        for pair in s.split_terminator(';') {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(SchemaError::InvalidTypeStructure {
                    detail: format!("malformed metadata pair '{pair}'"),
                });
            };
            map.insert(key.to_string(), value.to_string());
        }
        Ok(Self(map))
    }
}
