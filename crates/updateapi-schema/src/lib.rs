//! Language-neutral schema model for the updateapi generator.
//!
//! This crate defines the intermediate representation shared by the scanners
//! (front end) and the code generators (back ends):
//!
//! - [`SchemaModel`]: every record and enumeration the protocol transports
//! - [`ApiModel`]: the event surface in both directions, plus ack types
//! - [`Diagnostic`]: per-item, non-fatal findings produced during scanning
//!
//! The models are built once per generation run and are read-only afterwards.
//! Nothing here touches the filesystem; parsing lives in `updateapi-scan` and
//! emission in `updateapi-gen`.

pub mod api;
pub mod diagnostic;
pub mod error;
pub mod model;
pub mod naming;

pub use api::ApiModel;
pub use diagnostic::{Diagnostic, DiagnosticCode};
pub use error::SchemaError;
pub use model::{EnumSpec, FieldKind, FieldSpec, RecordSpec, ScalarKind, SchemaModel};
