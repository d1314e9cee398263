use std::fmt::{Error, Result, Write as _};

use super::{RecordField, SchemaNode};

/// Format a schema node in a readable style:
/// scalar entries are rendered in one line, composite nodes are pretty-printed.
/// Nested nodes follow the same rule.
pub fn format_schema_node(node: &SchemaNode) -> std::result::Result<String, Error> {
    let mut out = String::new();
    format_node(node, 0, &mut out)?;
    Ok(out)
}

fn format_node(node: &SchemaNode, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    match node {
        SchemaNode::Scalar(keyword) => writeln!(out, "{pad}{keyword}"),
        SchemaNode::Record { name, fields } => {
            writeln!(out, "{pad}record {name}:")?;
            for field in fields {
                format_field(field, indent + 4, out)?;
            }
            Ok(())
        }
        SchemaNode::Array { items } => {
            format_labeled("array of", items, indent, out)
        }
        SchemaNode::Union(branches) => {
            writeln!(out, "{pad}union:")?;
            for branch in branches {
                format_node(branch, indent + 4, out)?;
            }
            Ok(())
        }
    }
}

fn format_field(field: &RecordField, indent: usize, out: &mut String) -> Result {
    format_labeled(&field.name, &field.node, indent, out)
}

fn format_labeled(label: &str, node: &SchemaNode, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if let SchemaNode::Scalar(keyword) = node {
        writeln!(out, "{pad}{label}: {keyword}")
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_node(node, indent + 4, out)
    }
}
