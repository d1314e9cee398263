use ora2avro_core::{RecordField, SchemaNode};
use serde_json::json;

fn setting_record() -> SchemaNode {
    SchemaNode::Record {
        name: "SETTING".to_string(),
        fields: vec![
            RecordField::new("name", SchemaNode::scalar("string")),
            RecordField::new("value", SchemaNode::scalar("string")),
        ],
    }
}

#[test]
fn scalar_renders_as_json_string() {
    assert_eq!(SchemaNode::scalar("long").to_json(), json!("long"));
}

#[test]
fn record_renders_fields_in_order() {
    let expected = json!({
        "type": "record",
        "name": "SETTING",
        "fields": [
            { "name": "name", "type": "string" },
            { "name": "value", "type": "string" },
        ],
    });
    assert_eq!(setting_record().to_json(), expected);
}

#[test]
fn array_renders_items_schema() {
    let node = SchemaNode::Array {
        items: Box::new(setting_record()),
    };
    let json = node.to_json();
    assert_eq!(json["type"], json!("array"));
    assert_eq!(json["items"]["name"], json!("SETTING"));
}

#[test]
fn union_renders_as_json_array() {
    let node = SchemaNode::Union(vec![
        SchemaNode::scalar("null"),
        SchemaNode::scalar("string"),
    ]);
    assert_eq!(node.to_json(), json!(["null", "string"]));
}

#[test]
fn kind_name_tags_each_variant() {
    assert_eq!(SchemaNode::scalar("int").kind_name(), "int");
    assert_eq!(setting_record().kind_name(), "record");
    assert_eq!(
        SchemaNode::Array {
            items: Box::new(SchemaNode::scalar("int")),
        }
        .kind_name(),
        "array"
    );
    assert_eq!(SchemaNode::Union(vec![]).kind_name(), "union");
}

#[test]
fn display_formats_nested_nodes() {
    let node = SchemaNode::Array {
        items: Box::new(setting_record()),
    };
    let text = node.to_string();
    assert_eq!(
        text,
        "array of:\n    record SETTING:\n        name: string\n        value: string\n"
    );
}
