//! TypeScript send-side API for the admin client.
//!
//! Structurally the same typed emission as the mobile send surface, but
//! without the refresh-and-replay wrapper; the admin console manages its own
//! session lifetime.

use crate::GENERATED_BANNER;
use std::collections::BTreeSet;
use updateapi_schema::{ApiModel, ScalarKind};

/// Generate the whole `api.ts` artifact.
pub fn generate_admin_api(api: &ApiModel) -> String {
    let mut code = String::new();
    code.push_str(&format!("// {GENERATED_BANNER}\n\n"));
    code.push_str("import { Socket } from 'socket.io-client';\n\n");

    let payloads: BTreeSet<&str> = api
        .server_entrypoints
        .values()
        .map(String::as_str)
        .collect();
    if !payloads.is_empty() {
        let list = payloads.into_iter().collect::<Vec<_>>().join(", ");
        code.push_str(&format!("import {{ {list} }} from './dto';\n\n"));
    }

    code.push_str("export class AdminApi {\n");
    code.push_str("  constructor(private readonly socket: Socket) {}\n");

    for (event, payload) in &api.server_entrypoints {
        let ack = api
            .server_acks
            .get(event)
            .map_or("unknown", |kind| ack_type(*kind));
        code.push_str(&format!(
            "\n  {event}(body: {payload}): Promise<{ack}> {{\n"
        ));
        code.push_str(&format!(
            "    return this.socket.emitWithAck('{event}', body) as Promise<{ack}>;\n"
        ));
        code.push_str("  }\n");
    }

    code.push_str("}\n");
    code
}

fn ack_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => "string",
        ScalarKind::Number => "number",
        ScalarKind::Boolean => "boolean",
    }
}
