//! Recursive descent from [`TypeDescriptor`] trees to [`FieldType`] trees.

use ora2avro_core::{
    CollectionType, FieldType, NumericBounds, PrimitiveType, SchemaError, StructType,
};

use crate::{
    descriptor::TypeDescriptor,
    types::{avro_primitive_for, is_number_family},
};

/// Depth limit applied when none is configured explicitly.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Walks a source type descriptor tree and builds the corresponding
/// [`FieldType`] tree, bottom-up.
///
/// Translation is a pure, synchronous tree transformation: no I/O, no shared
/// state. Independent descriptors may be translated concurrently by
/// independent callers. Errors abort the enclosing translation; there is no
/// partial schema output.
///
/// The descriptor graph is assumed acyclic, but recursion depth is still
/// bounded to guard against malformed catalog metadata.
#[derive(Debug, Clone)]
pub struct Translator {
    max_depth: usize,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Translate a descriptor into a field type.
    ///
    /// Fails with [`SchemaError::UnsupportedSourceType`] for unlisted
    /// primitive names, [`SchemaError::InvalidTypeStructure`] for malformed
    /// struct/collection shapes, [`SchemaError::DuplicateFieldName`] for
    /// repeated struct field names, and [`SchemaError::TypeDepthExceeded`]
    /// when nesting passes the configured limit.
    pub fn translate(&self, descriptor: &TypeDescriptor) -> Result<FieldType, SchemaError> {
        self.translate_at(descriptor, 0)
    }

    fn translate_at(
        &self,
        descriptor: &TypeDescriptor,
        depth: usize,
    ) -> Result<FieldType, SchemaError> {
        if depth >= self.max_depth {
            return Err(SchemaError::TypeDepthExceeded {
                limit: self.max_depth,
            });
        }

        match descriptor {
            TypeDescriptor::Primitive {
                type_name,
                precision,
                scale,
            } => {
                let avro = avro_primitive_for(type_name, *precision, *scale)?;
                let primitive = match precision {
                    Some(p) if is_number_family(type_name) => PrimitiveType::numeric(
                        type_name,
                        avro,
                        NumericBounds {
                            precision: *p,
                            scale: scale.unwrap_or(0),
                        },
                    ),
                    _ => PrimitiveType::new(type_name, avro),
                };
                Ok(FieldType::Primitive(primitive))
            }
            TypeDescriptor::Struct { type_name, fields } => {
                let mut children = Vec::with_capacity(fields.len());
                for (name, child) in fields {
                    let translated = self.translate_at(child, depth + 1)?;
                    children.push((name.clone(), translated));
                }
                Ok(FieldType::Struct(StructType::new(type_name, children)?))
            }
            TypeDescriptor::Collection {
                type_name,
                elements,
            } => {
                let translated = elements
                    .iter()
                    .map(|e| self.translate_at(e, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(FieldType::Collection(CollectionType::new(
                    type_name, translated,
                )?))
            }
        }
    }
}
