//! Gateway scanner: server-receivable entrypoints and their ack types.
//!
//! A handler is any method inside an `impl` block carrying
//! `#[subscribe_message("eventName")]`. To be accepted it must:
//!
//! 1. be an `async fn` (acks travel back on the same round trip, so every
//!    acknowledging entrypoint resolves its value in the future),
//! 2. declare an ack type that reduces to exactly one primitive — either a
//!    bare `String`/number/`bool` or `Option` of one (the "value or absent"
//!    union). `Result`, tuples and nested `Option`s have more than one
//!    concrete member and cannot be generated unambiguously,
//! 3. mark its payload parameter with `#[message_body]`.
//!
//! A handler failing any rule is skipped with a diagnostic; the rest of the
//! scan continues.

use crate::source::{self, SourceFile};
use crate::typeref::{TypeShape, is_multi_member, render_type, shape_of};
use crate::{BODY_ATTR, EVENTS_SUFFIX, GATEWAY_SUFFIX, SUBSCRIBE_ATTR, ScanError, events};
use std::path::Path;
use syn::ReturnType;
use updateapi_schema::{ApiModel, Diagnostic, DiagnosticCode, ScalarKind};

/// Result of one API scan (client and server side together).
#[derive(Debug, Default)]
pub struct ApiScan {
    pub api: ApiModel,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan `*.gateway.rs` and `*.events.rs` files under `root`.
pub fn scan_api_dir(root: &Path) -> Result<ApiScan, ScanError> {
    let gateways = source::load_sources(root, GATEWAY_SUFFIX)?;
    let events = source::load_sources(root, EVENTS_SUFFIX)?;
    let as_pairs = |files: &[SourceFile]| -> Vec<(String, String)> {
        files
            .iter()
            .map(|s| (s.origin.clone(), s.text.clone()))
            .collect()
    };
    let g = as_pairs(&gateways);
    let e = as_pairs(&events);
    scan_api_sources(
        &g.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect::<Vec<_>>(),
        &e.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect::<Vec<_>>(),
    )
}

/// Scan in-memory gateway and event-mapping sources.
pub fn scan_api_sources(
    gateway_sources: &[(&str, &str)],
    event_sources: &[(&str, &str)],
) -> Result<ApiScan, ScanError> {
    let mut scan = ApiScan::default();

    for (origin, text) in event_sources {
        let file = source::parse_source(origin, text)?;
        events::collect_client_events(&file, &mut scan);
    }

    for (origin, text) in gateway_sources {
        let file = source::parse_source(origin, text)?;
        for item in &file.items {
            let syn::Item::Impl(block) = item else {
                continue;
            };
            for impl_item in &block.items {
                if let syn::ImplItem::Fn(method) = impl_item {
                    collect_handler(method, &mut scan);
                }
            }
        }
    }

    Ok(scan)
}

fn collect_handler(method: &syn::ImplItemFn, scan: &mut ApiScan) {
    let Some(event) = subscribe_event(&method.attrs) else {
        return;
    };

    if method.sig.asyncness.is_none() {
        warn_skip(
            scan,
            DiagnosticCode::NonAsyncHandler,
            &event,
            method.sig.ident.to_string(),
        );
        return;
    }

    let ack = match resolve_ack(&method.sig.output) {
        Ok(ack) => ack,
        Err(AckIssue::Ambiguous(detail)) => {
            warn_skip(scan, DiagnosticCode::AmbiguousAck, &event, detail);
            return;
        }
        Err(AckIssue::NonPrimitive(detail)) => {
            warn_skip(scan, DiagnosticCode::NonPrimitiveAck, &event, detail);
            return;
        }
    };

    let Some(payload) = body_payload(&method.sig) else {
        warn_skip(
            scan,
            DiagnosticCode::MissingBody,
            &event,
            method.sig.ident.to_string(),
        );
        return;
    };

    scan.api.insert_server_entrypoint(&event, &payload, ack);
}

/// The event-name literal of `#[subscribe_message("...")]`, if present.
fn subscribe_event(attrs: &[syn::Attribute]) -> Option<String> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident(SUBSCRIBE_ATTR))
        .and_then(|attr| attr.parse_args::<syn::LitStr>().ok())
        .map(|lit| lit.value())
}

/// The type name of the `#[message_body]` parameter, final segment only.
fn body_payload(sig: &syn::Signature) -> Option<String> {
    for input in &sig.inputs {
        let syn::FnArg::Typed(pat_type) = input else {
            continue;
        };
        if !pat_type.attrs.iter().any(|a| a.path().is_ident(BODY_ATTR)) {
            continue;
        }
        if let TypeShape::Named(name) = shape_of(&pat_type.ty) {
            return Some(name);
        }
    }
    None
}

enum AckIssue {
    /// More than one concrete member; no single primitive to reduce to.
    Ambiguous(String),
    /// Not a transportable primitive at all.
    NonPrimitive(String),
}

fn resolve_ack(output: &ReturnType) -> Result<ScalarKind, AckIssue> {
    let ty = match output {
        ReturnType::Default => return Err(AckIssue::NonPrimitive("()".to_string())),
        ReturnType::Type(_, ty) => ty.as_ref(),
    };

    if is_multi_member(ty) {
        return Err(AckIssue::Ambiguous(render_type(ty)));
    }

    match shape_of(ty) {
        TypeShape::Scalar(kind) => Ok(kind),
        TypeShape::Optional(inner) => match *inner {
            TypeShape::Scalar(kind) => Ok(kind),
            TypeShape::Optional(_) => Err(AckIssue::Ambiguous(render_type(ty))),
            _ => Err(AckIssue::NonPrimitive(render_type(ty))),
        },
        _ => Err(AckIssue::NonPrimitive(render_type(ty))),
    }
}

pub(crate) fn warn_skip(
    scan: &mut ApiScan,
    code: DiagnosticCode,
    subject: impl Into<String>,
    detail: impl Into<String>,
) {
    let diag = Diagnostic::new(code, subject, detail);
    tracing::warn!(%diag, "skipping entrypoint");
    scan.diagnostics.push(diag);
}
