//! Static analysis of DTO and gateway declarations.
//!
//! This is the front end of the generator. It parses Rust declaration files
//! with [`syn`] (nothing is ever compiled or executed) and populates the
//! models from `updateapi-schema`:
//!
//! - [`dto::scan_dto_dir`] reads `*.dto.rs` files into a
//!   [`updateapi_schema::SchemaModel`]
//! - [`gateway`] and [`events`] read `*.gateway.rs` / `*.events.rs` files
//!   into an [`updateapi_schema::ApiModel`] via [`scan_api_dir`]
//!
//! Per-item problems (an unsupported field, a handler with a bad ack type)
//! become [`updateapi_schema::Diagnostic`]s and never abort a scan. Unreadable
//! or unparseable files are fatal: a contract that cannot be read must not be
//! half-generated.

pub mod dto;
pub mod events;
pub mod gateway;
mod source;
mod typeref;

pub use dto::{DtoScan, scan_dto_dir, scan_dto_sources};
pub use gateway::{ApiScan, scan_api_dir, scan_api_sources};

use std::path::PathBuf;
use thiserror::Error;

/// Filename suffix for DTO declaration files.
pub const DTO_SUFFIX: &str = ".dto.rs";
/// Filename suffix for gateway declaration files.
pub const GATEWAY_SUFFIX: &str = ".gateway.rs";
/// Filename suffix for client-event mapping files.
pub const EVENTS_SUFFIX: &str = ".events.rs";

/// Fixed type name of the client-receivable event mapping.
pub const CLIENT_EVENTS_TYPE: &str = "ClientEvents";
/// Attribute marking a gateway method as a message receiver.
pub const SUBSCRIBE_ATTR: &str = "subscribe_message";
/// Attribute marking a handler parameter as the message payload.
pub const BODY_ATTR: &str = "message_body";

/// Fatal scan failures. Everything else is a diagnostic.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: syn::Error,
    },

    #[error(transparent)]
    Schema(#[from] updateapi_schema::SchemaError),
}
