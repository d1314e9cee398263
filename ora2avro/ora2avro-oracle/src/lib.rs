//! Oracle type-descriptor translation for `ora2avro`.
//!
//! Takes raw [`TypeDescriptor`] trees from a catalog reader and produces
//! [`FieldType`](ora2avro_core::FieldType) trees via the [`Translator`].

mod descriptor;
mod translator;
mod types;

pub use descriptor::TypeDescriptor;
pub use translator::{DEFAULT_MAX_DEPTH, Translator};
pub use types::{avro_primitive_for, is_number_family, number_keyword};
