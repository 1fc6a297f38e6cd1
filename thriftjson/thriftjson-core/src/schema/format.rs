use std::fmt::{Error, Result, Write as _};

use super::{FieldSpec, FieldType, StructSpec};

/// Format a struct spec in a readable style:
/// primitive fields are rendered in one line, compound fields are pretty-printed.
/// Nested fields follow the same rule. Gaps are not rendered.
pub fn format_struct_spec(spec: &StructSpec) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in spec.fields() {
        format_field(field, 0, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &FieldSpec, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if field.field_type.is_primitive() {
        writeln!(
            out,
            "{pad}{}: {{ id: {}, type: {} }}",
            field.name,
            field.id,
            field.field_type.type_name()
        )
    } else {
        writeln!(out, "{pad}{}:", field.name)?;
        writeln!(out, "{pad}    id: {}", field.id)?;
        format_field_type(&field.field_type, indent + 4, out)
    }
}

fn format_field_type(field_type: &FieldType, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);

    match field_type {
        FieldType::Struct(spec) => {
            writeln!(out, "{pad}type: struct {}", spec.name)?;
            writeln!(out, "{pad}fields:")?;
            for child in spec.fields() {
                format_field(child, indent + 4, out)?;
            }
        }
        FieldType::List(elem) | FieldType::Set(elem) => {
            writeln!(out, "{pad}type: {}", field_type.type_name())?;
            format_labeled_type("item", elem, indent, out)?;
        }
        FieldType::Map { key, value } => {
            writeln!(out, "{pad}type: map")?;
            format_labeled_type("key", key, indent, out)?;
            format_labeled_type("value", value, indent, out)?;
        }
        _ => writeln!(out, "{pad}type: {}", field_type.type_name())?,
    }

    Ok(())
}

fn format_labeled_type(
    label: &str,
    field_type: &FieldType,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if field_type.is_primitive() {
        writeln!(out, "{pad}{label}: {{ type: {} }}", field_type.type_name())
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_field_type(field_type, indent + 4, out)
    }
}
