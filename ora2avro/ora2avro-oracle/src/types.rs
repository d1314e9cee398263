//! The Oracle primitive lookup table.
//!
//! Maps Oracle column type names to Avro primitive keywords. The table is
//! explicit and closed: an unlisted type name fails with
//! [`SchemaError::UnsupportedSourceType`] rather than being approximated.

use ora2avro_core::{AvroPrimitive, SchemaError};

/// Resolve an Oracle primitive type name to its Avro keyword.
///
/// `precision` and `scale` only influence NUMBER-family types; see
/// [`number_keyword`] for the rule.
pub fn avro_primitive_for(
    type_name: &str,
    precision: Option<u32>,
    scale: Option<i32>,
) -> Result<AvroPrimitive, SchemaError> {
    let avro = match type_name {
        "CHAR" | "NCHAR" | "VARCHAR" | "VARCHAR2" | "NVARCHAR2" | "CLOB" | "NCLOB" | "LONG"
        | "ROWID" | "UROWID" | "XMLTYPE" => AvroPrimitive::String,
        "RAW" | "LONG RAW" | "BLOB" => AvroPrimitive::Bytes,
        "FLOAT" | "BINARY_FLOAT" => AvroPrimitive::Float,
        "BINARY_DOUBLE" => AvroPrimitive::Double,
        "INTEGER" | "SMALLINT" => AvroPrimitive::Long,
        "BOOLEAN" => AvroPrimitive::Boolean,
        "NUMBER" | "NUMERIC" | "DECIMAL" => number_keyword(precision, scale),
        // DATE and the TIMESTAMP family are emitted as epoch instants.
        "DATE" => AvroPrimitive::Long,
        name if name.starts_with("TIMESTAMP") => AvroPrimitive::Long,
        _ => {
            return Err(SchemaError::UnsupportedSourceType {
                type_name: type_name.to_string(),
            });
        }
    };
    Ok(avro)
}

/// True when the type name belongs to the fixed-precision NUMBER family,
/// whose precision and scale are carried into the field metadata.
pub fn is_number_family(type_name: &str) -> bool {
    matches!(type_name, "NUMBER" | "NUMERIC" | "DECIMAL")
}

/// The NUMBER precision/scale rule.
///
/// A positive scale means a fractional part exists, so the value maps to
/// `double`. With no declared precision the value range is unbounded and
/// also maps to `double`. Integral values map to the narrowest Avro integer
/// that can hold the declared number of digits.
pub fn number_keyword(precision: Option<u32>, scale: Option<i32>) -> AvroPrimitive {
    if scale.is_some_and(|s| s > 0) {
        return AvroPrimitive::Double;
    }
    match precision {
        Some(p) if p <= 9 => AvroPrimitive::Int,
        Some(p) if p <= 18 => AvroPrimitive::Long,
        _ => AvroPrimitive::Double,
    }
}
