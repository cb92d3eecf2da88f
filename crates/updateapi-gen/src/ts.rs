//! TypeScript DTO generation: plain structural declarations.
//!
//! The admin codebase consumes these as its single source of truth for the
//! message contract; no serialization methods are emitted because TypeScript
//! objects already have the wire shape.

use crate::GENERATED_BANNER;
use updateapi_schema::naming::to_camel_case;
use updateapi_schema::{FieldKind, FieldSpec, ScalarKind, SchemaModel};

/// Generate the whole `dto.ts` artifact.
pub fn generate_ts_dtos(schema: &SchemaModel) -> String {
    let mut code = String::new();
    code.push_str(&format!("// {GENERATED_BANNER}\n\n"));

    for spec in schema.enums() {
        code.push_str(&format!("export enum {} {{\n", spec.name));
        for member in &spec.members {
            code.push_str(&format!("  {member} = '{member}',\n"));
        }
        code.push_str("}\n\n");
    }

    for record in schema.records() {
        code.push_str(&format!("export interface {} {{\n", record.name));
        for field in &record.fields {
            let name = to_camel_case(&field.name);
            let marker = if field.optional { "?" } else { "" };
            code.push_str(&format!("  {name}{marker}: {};\n", ts_type(field)));
        }
        code.push_str("}\n\n");
    }

    code
}

fn ts_type(field: &FieldSpec) -> String {
    match &field.kind {
        FieldKind::Scalar(kind) => scalar_type(*kind).to_string(),
        FieldKind::ScalarArray(kind) => format!("{}[]", scalar_type(*kind)),
        FieldKind::Record(name) | FieldKind::Enum(name) => name.clone(),
        FieldKind::RecordArray(name) | FieldKind::EnumArray(name) => format!("{name}[]"),
    }
}

fn scalar_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => "string",
        ScalarKind::Number => "number",
        ScalarKind::Boolean => "boolean",
    }
}
