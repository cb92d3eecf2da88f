//! Dart DTO generation: enums plus classes with `fromJson`/`toJson`/`patch`.
//!
//! Wire names are the camelCase form of the declared field name. A scalar
//! number is a Dart `double` iff its wire name carries the float suffix,
//! otherwise `int`. Enum literals travel as the member name and are decoded
//! with `values.byName`. Optional fields are read conditionally: a missing or
//! null key becomes `null`, never a throw.

use crate::GENERATED_BANNER;
use updateapi_schema::naming::{is_float_name, to_camel_case};
use updateapi_schema::{FieldKind, FieldSpec, RecordSpec, ScalarKind, SchemaModel};

/// Generate the whole `dto.dart` artifact.
pub fn generate_dart_dtos(schema: &SchemaModel) -> String {
    let mut code = String::new();
    code.push_str(&format!("// {GENERATED_BANNER}\n\n"));

    for spec in schema.enums() {
        code.push_str(&format!("enum {} {{\n", spec.name));
        for member in &spec.members {
            code.push_str(&format!("  {member},\n"));
        }
        code.push_str("}\n\n");
    }

    for record in schema.records() {
        code.push_str(&generate_class(record));
        code.push('\n');
    }

    code
}

fn generate_class(record: &RecordSpec) -> String {
    let mut code = String::new();
    code.push_str(&format!("class {} {{\n", record.name));

    // Constructor, fields in declaration order.
    if record.fields.is_empty() {
        code.push_str(&format!("  {}();\n", record.name));
    } else {
        code.push_str(&format!("  {}({{\n", record.name));
        for field in &record.fields {
            let name = to_camel_case(&field.name);
            if field.optional {
                code.push_str(&format!("    this.{name},\n"));
            } else {
                code.push_str(&format!("    required this.{name},\n"));
            }
        }
        code.push_str("  });\n");
    }
    code.push('\n');

    // fromJson.
    code.push_str(&format!(
        "  factory {}.fromJson(Map<String, dynamic> json) {{\n",
        record.name
    ));
    code.push_str(&format!("    return {}(\n", record.name));
    for field in &record.fields {
        let name = to_camel_case(&field.name);
        code.push_str(&format!("      {name}: {},\n", from_json_expr(field)));
    }
    code.push_str("    );\n  }\n\n");

    // Field declarations.
    for field in &record.fields {
        let name = to_camel_case(&field.name);
        let suffix = if field.optional { "?" } else { "" };
        code.push_str(&format!("  {}{suffix} {name};\n", dart_type(field)));
    }
    code.push('\n');

    // toJson. Absent optional fields are omitted from the object so that
    // serializing a partially-populated instance round-trips.
    code.push_str("  Map<String, dynamic> toJson() {\n");
    code.push_str("    return <String, dynamic>{\n");
    for field in &record.fields {
        let name = to_camel_case(&field.name);
        let expr = to_json_expr(field);
        if field.optional {
            code.push_str(&format!("      if ({name} != null) '{name}': {expr},\n"));
        } else {
            code.push_str(&format!("      '{name}': {expr},\n"));
        }
    }
    code.push_str("    };\n  }\n\n");

    // patch: last-write-wins per present field, for applying incremental
    // server pushes onto client-held state.
    code.push_str(&format!("  void patch({} other) {{\n", record.name));
    for field in &record.fields {
        let name = to_camel_case(&field.name);
        if field.optional {
            code.push_str(&format!("    {name} = other.{name} ?? {name};\n"));
        } else {
            code.push_str(&format!("    {name} = other.{name};\n"));
        }
    }
    code.push_str("  }\n}\n");

    code
}

/// Dart type of a field, without the optional `?`.
fn dart_type(field: &FieldSpec) -> String {
    let wire = to_camel_case(&field.name);
    match &field.kind {
        FieldKind::Scalar(kind) => scalar_type(*kind, &wire).to_string(),
        FieldKind::ScalarArray(kind) => format!("List<{}>", scalar_type(*kind, &wire)),
        FieldKind::Record(name) | FieldKind::Enum(name) => name.clone(),
        FieldKind::RecordArray(name) | FieldKind::EnumArray(name) => format!("List<{name}>"),
    }
}

fn scalar_type(kind: ScalarKind, wire: &str) -> &'static str {
    match kind {
        ScalarKind::String => "String",
        ScalarKind::Number => {
            if is_float_name(wire) {
                "double"
            } else {
                "int"
            }
        }
        ScalarKind::Boolean => "bool",
    }
}

fn from_json_expr(field: &FieldSpec) -> String {
    let wire = to_camel_case(&field.name);
    let key = format!("json['{wire}']");

    let base = match &field.kind {
        FieldKind::Scalar(kind) => scalar_read(kind, &key, &wire),
        FieldKind::ScalarArray(kind) => format!(
            "({key} as List<dynamic>).map((e) => {}).toList()",
            scalar_read(kind, "e", &wire)
        ),
        FieldKind::Record(name) => format!("{name}.fromJson({key} as Map<String, dynamic>)"),
        FieldKind::RecordArray(name) => format!(
            "({key} as List<dynamic>).map((e) => {name}.fromJson(e as Map<String, dynamic>)).toList()"
        ),
        FieldKind::Enum(name) => format!("{name}.values.byName({key} as String)"),
        FieldKind::EnumArray(name) => format!(
            "({key} as List<dynamic>).map((e) => {name}.values.byName(e as String)).toList()"
        ),
    };

    if field.optional {
        format!("{key} == null ? null : {base}")
    } else {
        base
    }
}

fn scalar_read(kind: &ScalarKind, source: &str, wire: &str) -> String {
    match kind {
        ScalarKind::String => format!("{source} as String"),
        ScalarKind::Number => {
            if is_float_name(wire) {
                format!("({source} as num).toDouble()")
            } else {
                format!("({source} as num).toInt()")
            }
        }
        ScalarKind::Boolean => format!("{source} as bool"),
    }
}

fn to_json_expr(field: &FieldSpec) -> String {
    let name = to_camel_case(&field.name);
    let access = if field.optional {
        format!("{name}?")
    } else {
        name.clone()
    };
    match &field.kind {
        FieldKind::Scalar(_) | FieldKind::ScalarArray(_) => name,
        FieldKind::Record(_) => format!("{access}.toJson()"),
        FieldKind::RecordArray(_) => format!("{access}.map((e) => e.toJson()).toList()"),
        FieldKind::Enum(_) => format!("{access}.name"),
        FieldKind::EnumArray(_) => format!("{access}.map((e) => e.name).toList()"),
    }
}

#[cfg(test)]
mod dart_tests;
