//! Code emitters for the updateapi generator.
//!
//! Every emitter is a pure function from the read-only models to source text;
//! writing files and invoking formatters is the orchestrator's job. Two back
//! ends share the one intermediate schema:
//!
//! - **Dart** (mobile client): [`dart::generate_dart_dtos`] with manual
//!   JSON (de)serialization and partial-update merging, plus the receive and
//!   send API surfaces in [`dart_api`].
//! - **TypeScript** (admin client): [`ts::generate_ts_dtos`] as plain
//!   structural declarations, plus the send surface in [`ts_api`].
//!
//! Output is valid, readable source on its own; each target codebase's own
//! formatter runs afterwards, so emitters do not chase exact formatting.

pub mod dart;
pub mod dart_api;
pub mod ts;
pub mod ts_api;

pub use dart::generate_dart_dtos;
pub use dart_api::{generate_client_api, generate_server_events};
pub use ts::generate_ts_dtos;
pub use ts_api::generate_admin_api;

/// Banner at the top of every generated artifact.
pub const GENERATED_BANNER: &str = "GENERATED FILE - do not edit. Run `updateapi generate` to refresh.";
