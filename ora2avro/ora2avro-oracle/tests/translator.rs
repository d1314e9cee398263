use ora2avro_core::{FIELD_TYPE_NAME, FieldType, PRECISION, SCALE, SchemaError, SchemaNode};
use ora2avro_oracle::{Translator, TypeDescriptor};

fn setting_descriptor() -> TypeDescriptor {
    TypeDescriptor::structure(
        "SETTING",
        vec![
            ("name", TypeDescriptor::primitive("VARCHAR2")),
            ("value", TypeDescriptor::primitive("VARCHAR2")),
        ],
    )
}

#[test]
fn varchar2_maps_to_string() {
    let field = Translator::new()
        .translate(&TypeDescriptor::primitive("VARCHAR2"))
        .unwrap();
    assert_eq!(field.schema_name(), "string");
    assert_eq!(field.field_type_name(), "VARCHAR2");
}

#[test]
fn fixed_point_number_carries_precision_and_scale() {
    let field = Translator::new()
        .translate(&TypeDescriptor::numeric("NUMBER", 10, 2))
        .unwrap();

    // Positive scale means a fractional part, so the schema type is double.
    assert_eq!(field.schema_name(), "double");

    let meta = field.metadata();
    assert_eq!(meta.get(FIELD_TYPE_NAME), Some("NUMBER"));
    assert_eq!(meta.get(PRECISION), Some("10"));
    assert_eq!(meta.get(SCALE), Some("2"));
}

#[test]
fn integral_numbers_map_by_precision() {
    let translator = Translator::new();

    let small = translator
        .translate(&TypeDescriptor::numeric("NUMBER", 9, 0))
        .unwrap();
    assert_eq!(small.schema_name(), "int");

    let wide = translator
        .translate(&TypeDescriptor::numeric("NUMBER", 18, 0))
        .unwrap();
    assert_eq!(wide.schema_name(), "long");

    let huge = translator
        .translate(&TypeDescriptor::numeric("NUMBER", 38, 0))
        .unwrap();
    assert_eq!(huge.schema_name(), "double");
}

#[test]
fn setting_struct_becomes_record_with_ordered_string_fields() {
    let field = Translator::new().translate(&setting_descriptor()).unwrap();
    assert_eq!(field.schema_name(), "record");

    let SchemaNode::Record { name, fields } = field.to_avro() else {
        panic!("expected a record node");
    };
    assert_eq!(name, "SETTING");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "name");
    assert_eq!(fields[0].node, SchemaNode::scalar("string"));
    assert_eq!(fields[1].name, "value");
    assert_eq!(fields[1].node, SchemaNode::scalar("string"));
}

#[test]
fn collection_of_settings_becomes_array_of_records() {
    let desc = TypeDescriptor::collection("SETTINGS", vec![setting_descriptor()]);
    let field = Translator::new().translate(&desc).unwrap();
    assert_eq!(field.schema_name(), "array");

    let SchemaNode::Array { items } = field.to_avro() else {
        panic!("expected an array node");
    };
    let SchemaNode::Record { name, .. } = *items else {
        panic!("expected the array to wrap a record node");
    };
    assert_eq!(name, "SETTING");
}

#[test]
fn collection_with_two_element_types_fails() {
    let desc = TypeDescriptor::collection(
        "MIXED",
        vec![
            TypeDescriptor::primitive("CHAR"),
            TypeDescriptor::primitive("INTEGER"),
        ],
    );
    let err = Translator::new().translate(&desc).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidTypeStructure { .. }));
}

#[test]
fn unknown_source_type_is_not_approximated() {
    let err = Translator::new()
        .translate(&TypeDescriptor::primitive("SDO_GEOMETRY"))
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnsupportedSourceType {
            type_name: "SDO_GEOMETRY".to_string(),
        }
    );
}

#[test]
fn duplicate_struct_field_names_fail() {
    let desc = TypeDescriptor::structure(
        "SETTING",
        vec![
            ("name", TypeDescriptor::primitive("VARCHAR2")),
            ("name", TypeDescriptor::primitive("CHAR")),
        ],
    );
    let err = Translator::new().translate(&desc).unwrap_err();
    assert_eq!(
        err,
        SchemaError::DuplicateFieldName {
            type_name: "SETTING".to_string(),
            field: "name".to_string(),
        }
    );
}

#[test]
fn nesting_past_the_depth_limit_fails() {
    let mut desc = TypeDescriptor::primitive("CHAR");
    for i in 0..8 {
        desc = TypeDescriptor::collection(format!("ARR_{i}"), vec![desc]);
    }
    let err = Translator::with_max_depth(4).translate(&desc).unwrap_err();
    assert_eq!(err, SchemaError::TypeDepthExceeded { limit: 4 });

    let ok = Translator::with_max_depth(16).translate(&desc);
    assert!(ok.is_ok());
}

#[test]
fn deeply_nested_structs_translate_within_the_default_limit() {
    let inner = setting_descriptor();
    let outer = TypeDescriptor::structure(
        "PROFILE",
        vec![
            ("id", TypeDescriptor::numeric("NUMBER", 18, 0)),
            (
                "settings",
                TypeDescriptor::collection("SETTINGS", vec![inner]),
            ),
        ],
    );
    let field = Translator::new().translate(&outer).unwrap();

    let FieldType::Struct(profile) = &field else {
        panic!("expected a struct field type");
    };
    assert_eq!(profile.fields().len(), 2);
    assert_eq!(profile.fields()[0].0, "id");
    assert_eq!(profile.fields()[0].1.schema_name(), "long");
    assert_eq!(profile.fields()[1].1.schema_name(), "array");
}
