//! The event surface of the realtime API.

use crate::model::ScalarKind;
use std::collections::BTreeMap;

/// Event names and payload types in both directions, plus ack types.
///
/// - `client_entrypoints`: events the server pushes, subscribed to by the
///   mobile client (event name -> payload record name).
/// - `server_entrypoints`: events the server receives from clients
///   (event name -> payload record name).
/// - `server_acks`: the primitive kind each server entrypoint acknowledges
///   with. Every server entrypoint has exactly one entry here; the scanner
///   rejects handlers whose ack cannot be reduced to a primitive.
#[derive(Debug, Default)]
pub struct ApiModel {
    pub client_entrypoints: BTreeMap<String, String>,
    pub server_entrypoints: BTreeMap<String, String>,
    pub server_acks: BTreeMap<String, ScalarKind>,
}

impl ApiModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validated server entrypoint together with its ack kind.
    pub fn insert_server_entrypoint(&mut self, event: &str, payload: &str, ack: ScalarKind) {
        self.server_entrypoints
            .insert(event.to_string(), payload.to_string());
        self.server_acks.insert(event.to_string(), ack);
    }
}
