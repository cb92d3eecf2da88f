//! DTO scanner: `*.dto.rs` declarations into a [`SchemaModel`].
//!
//! Scanning is two-pass. The first pass collects every declared struct/enum
//! name so a field may reference a type declared later (or in another file);
//! the second pass classifies fields and registers specs. Unsupported field
//! shapes are skipped with a diagnostic, never fatal.
//!
//! Inline literal unions are declared as
//! `#[dto(one_of("A", "B"))] pub state: String` and are promoted to
//! synthesized enums named from the owning record and field (see
//! [`updateapi_schema::naming::synthesized_enum_name`]).

use crate::source::{self, SourceFile};
use crate::typeref::{TypeShape, render_type, shape_of};
use crate::{DTO_SUFFIX, ScanError};
use std::collections::BTreeSet;
use std::path::Path;
use syn::punctuated::Punctuated;
use updateapi_schema::naming::synthesized_enum_name;
use updateapi_schema::{
    Diagnostic, DiagnosticCode, EnumSpec, FieldKind, FieldSpec, RecordSpec, ScalarKind, SchemaModel,
};

/// Result of one DTO scan.
#[derive(Debug, Default)]
pub struct DtoScan {
    pub schema: SchemaModel,
    /// How many literal-union fields were promoted to synthesized enums.
    pub promoted_unions: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan every `*.dto.rs` file under `root`.
pub fn scan_dto_dir(root: &Path) -> Result<DtoScan, ScanError> {
    let sources = source::load_sources(root, DTO_SUFFIX)?;
    let pairs: Vec<(&str, &str)> = sources
        .iter()
        .map(|s: &SourceFile| (s.origin.as_str(), s.text.as_str()))
        .collect();
    scan_dto_sources(&pairs)
}

/// Scan in-memory `(origin, source)` pairs. Origins only appear in errors.
pub fn scan_dto_sources(sources: &[(&str, &str)]) -> Result<DtoScan, ScanError> {
    let mut files = Vec::with_capacity(sources.len());
    for (origin, text) in sources {
        files.push(source::parse_source(origin, text)?);
    }

    // Pass 1: declared names, so forward references resolve. Only names that
    // pass 2 will actually register may resolve, or a field could reference
    // a record that never reaches the artifact.
    let mut record_names = BTreeSet::new();
    let mut enum_names = BTreeSet::new();
    for file in &files {
        for item in &file.items {
            match item {
                syn::Item::Struct(s) if !matches!(s.fields, syn::Fields::Unnamed(_)) => {
                    record_names.insert(s.ident.to_string());
                }
                syn::Item::Enum(e) if is_unit_enum(e) => {
                    enum_names.insert(e.ident.to_string());
                }
                _ => {}
            }
        }
    }

    let mut scan = DtoScan::default();

    // Pass 2: build specs.
    for file in &files {
        for item in &file.items {
            match item {
                syn::Item::Enum(e) => {
                    let name = e.ident.to_string();
                    if !is_unit_enum(e) {
                        warn_skip(
                            &mut scan,
                            DiagnosticCode::UnsupportedField,
                            name,
                            "enum variants carrying data are not transportable",
                        );
                        continue;
                    }
                    let members = e.variants.iter().map(|v| v.ident.to_string()).collect();
                    scan.schema.insert_enum(EnumSpec { name, members })?;
                }
                syn::Item::Struct(s) => {
                    let record_name = s.ident.to_string();
                    let mut fields = Vec::new();
                    match &s.fields {
                        syn::Fields::Named(named) => {
                            for field in &named.named {
                                if let Some(spec) = classify_field(
                                    &mut scan,
                                    &record_names,
                                    &enum_names,
                                    &record_name,
                                    field,
                                )? {
                                    fields.push(spec);
                                }
                            }
                        }
                        syn::Fields::Unnamed(_) => {
                            warn_skip(
                                &mut scan,
                                DiagnosticCode::UnsupportedField,
                                record_name,
                                "tuple structs have no field names to transport",
                            );
                            continue;
                        }
                        syn::Fields::Unit => {}
                    }
                    scan.schema.insert_record(RecordSpec {
                        name: record_name,
                        fields,
                    })?;
                }
                _ => {}
            }
        }
    }

    Ok(scan)
}

/// Classify one struct field, or skip it with a diagnostic.
///
/// Synthesized-enum collisions are fatal (`?`), everything else is per-field.
fn classify_field(
    scan: &mut DtoScan,
    records: &BTreeSet<String>,
    enums: &BTreeSet<String>,
    record: &str,
    field: &syn::Field,
) -> Result<Option<FieldSpec>, ScanError> {
    let Some(ident) = &field.ident else {
        return Ok(None);
    };
    let name = ident.to_string();
    let subject = format!("{record}.{name}");

    let members = match literal_union_members(&field.attrs) {
        Ok(members) => members,
        Err(err) => {
            warn_skip(
                scan,
                DiagnosticCode::BadLiteralUnion,
                subject,
                err.to_string(),
            );
            return Ok(None);
        }
    };

    let (shape, optional) = match shape_of(&field.ty) {
        TypeShape::Optional(inner) => (*inner, true),
        other => (other, false),
    };

    if let Some(members) = members {
        return synthesize_union_field(scan, record, name, subject, shape, optional, members);
    }

    let kind = match shape {
        TypeShape::Scalar(kind) => FieldKind::Scalar(kind),
        TypeShape::Array(inner) => match *inner {
            TypeShape::Scalar(kind) => FieldKind::ScalarArray(kind),
            TypeShape::Named(target) if enums.contains(&target) => FieldKind::EnumArray(target),
            TypeShape::Named(target) if records.contains(&target) => {
                FieldKind::RecordArray(target)
            }
            TypeShape::Named(target) => {
                warn_skip(scan, DiagnosticCode::UnknownTypeRef, subject, target);
                return Ok(None);
            }
            _ => {
                warn_skip(
                    scan,
                    DiagnosticCode::UnsupportedField,
                    subject,
                    render_type(&field.ty),
                );
                return Ok(None);
            }
        },
        TypeShape::Named(target) if enums.contains(&target) => FieldKind::Enum(target),
        TypeShape::Named(target) if records.contains(&target) => FieldKind::Record(target),
        TypeShape::Named(target) => {
            warn_skip(scan, DiagnosticCode::UnknownTypeRef, subject, target);
            return Ok(None);
        }
        TypeShape::Optional(_) | TypeShape::Unsupported => {
            warn_skip(
                scan,
                DiagnosticCode::UnsupportedField,
                subject,
                render_type(&field.ty),
            );
            return Ok(None);
        }
    };

    Ok(Some(FieldSpec {
        name,
        kind,
        optional,
    }))
}

fn synthesize_union_field(
    scan: &mut DtoScan,
    record: &str,
    name: String,
    subject: String,
    shape: TypeShape,
    optional: bool,
    members: Vec<String>,
) -> Result<Option<FieldSpec>, ScanError> {
    if members.is_empty() {
        warn_skip(
            scan,
            DiagnosticCode::BadLiteralUnion,
            subject,
            "literal union has no members",
        );
        return Ok(None);
    }

    let array = match shape {
        TypeShape::Scalar(ScalarKind::String) => false,
        TypeShape::Array(inner) if *inner == TypeShape::Scalar(ScalarKind::String) => true,
        _ => {
            warn_skip(
                scan,
                DiagnosticCode::BadLiteralUnion,
                subject,
                "one_of applies only to String or Vec<String> fields",
            );
            return Ok(None);
        }
    };

    let enum_name = synthesized_enum_name(record, &name);
    scan.schema.insert_enum(EnumSpec {
        name: enum_name.clone(),
        members,
    })?;
    scan.promoted_unions += 1;

    let kind = if array {
        FieldKind::EnumArray(enum_name)
    } else {
        FieldKind::Enum(enum_name)
    };
    Ok(Some(FieldSpec {
        name,
        kind,
        optional,
    }))
}

/// Extract `#[dto(one_of("A", "B", ..))]` members, if the attribute exists.
fn literal_union_members(attrs: &[syn::Attribute]) -> Result<Option<Vec<String>>, syn::Error> {
    for attr in attrs {
        if !attr.path().is_ident("dto") {
            continue;
        }
        let mut members = Vec::new();
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("one_of") {
                let content;
                syn::parenthesized!(content in meta.input);
                let literals =
                    Punctuated::<syn::LitStr, syn::Token![,]>::parse_terminated(&content)?;
                members.extend(literals.iter().map(syn::LitStr::value));
                Ok(())
            } else {
                Err(meta.error("unknown dto attribute"))
            }
        })?;
        return Ok(Some(members));
    }
    Ok(None)
}

fn is_unit_enum(e: &syn::ItemEnum) -> bool {
    e.variants
        .iter()
        .all(|v| matches!(v.fields, syn::Fields::Unit))
}

fn warn_skip(
    scan: &mut DtoScan,
    code: DiagnosticCode,
    subject: impl Into<String>,
    detail: impl Into<String>,
) {
    let diag = Diagnostic::new(code, subject, detail);
    tracing::warn!(%diag, "skipping declaration");
    scan.diagnostics.push(diag);
}
