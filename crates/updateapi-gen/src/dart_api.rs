//! Dart API surfaces for the mobile client.
//!
//! Receive side: one broadcast stream per server-pushed event, deserializing
//! through the DTO's `fromJson`, plus the four fixed connection-lifecycle
//! streams. Send side: one typed method per server entrypoint, with a single
//! remembered last-call slot that is replayed once after a successful access
//! refresh.

use crate::GENERATED_BANNER;
use updateapi_schema::{ApiModel, ScalarKind};

/// Generate `server_events.dart`: the receive-side surface.
pub fn generate_server_events(api: &ApiModel) -> String {
    let mut code = String::new();
    code.push_str(&format!("// {GENERATED_BANNER}\n\n"));
    code.push_str("import 'dart:async';\n\n");
    code.push_str("import 'package:socket_io_client/socket_io_client.dart' as io;\n\n");
    code.push_str("import 'dto.dart';\n\n");

    code.push_str("/// Server-pushed event streams for one live connection.\n");
    code.push_str("class ServerEvents {\n");
    code.push_str("  ServerEvents(this._socket) {\n    _bind();\n  }\n\n");
    code.push_str("  final io.Socket _socket;\n\n");

    for (event, payload) in &api.client_entrypoints {
        code.push_str(&format!(
            "  final _{event} = StreamController<{payload}>.broadcast();\n"
        ));
        code.push_str(&format!(
            "  Stream<{payload}> get {event} => _{event}.stream;\n\n"
        ));
    }

    for stream in LIFECYCLE_STREAMS {
        code.push_str(&format!(
            "  final _{stream} = StreamController<void>.broadcast();\n"
        ));
        code.push_str(&format!(
            "  Stream<void> get {stream} => _{stream}.stream;\n\n"
        ));
    }

    code.push_str("  void _bind() {\n");
    for (event, payload) in &api.client_entrypoints {
        code.push_str(&format!("    _socket.on('{event}', (dynamic data) {{\n"));
        code.push_str(&format!(
            "      _{event}.add({payload}.fromJson(data as Map<String, dynamic>));\n"
        ));
        code.push_str("    });\n");
    }
    code.push_str("    _socket.onConnect((_) => _connected.add(null));\n");
    code.push_str("    _socket.onDisconnect((_) => _disconnected.add(null));\n");
    code.push_str("    _socket.onReconnectAttempt((_) => _reconnecting.add(null));\n");
    code.push_str("    _socket.onReconnect((_) => _reconnected.add(null));\n");
    code.push_str("  }\n\n");

    code.push_str("  void dispose() {\n");
    for event in api.client_entrypoints.keys() {
        code.push_str(&format!("    _{event}.close();\n"));
    }
    for stream in LIFECYCLE_STREAMS {
        code.push_str(&format!("    _{stream}.close();\n"));
    }
    code.push_str("  }\n}\n");

    code
}

const LIFECYCLE_STREAMS: [&str; 4] = ["connected", "disconnected", "reconnecting", "reconnected"];

/// Generate `client_api.dart`: the send-side surface with refresh-and-replay.
pub fn generate_client_api(api: &ApiModel) -> String {
    let mut code = String::new();
    code.push_str(&format!("// {GENERATED_BANNER}\n\n"));
    code.push_str("import 'dart:async';\n\n");
    code.push_str("import 'package:socket_io_client/socket_io_client.dart' as io;\n\n");
    code.push_str("import 'dto.dart';\n\n");

    code.push_str("/// Typed send surface for one live connection.\n");
    code.push_str("///\n");
    code.push_str("/// Every emit records the last (event, payload) pair. When the transport\n");
    code.push_str("/// reports an exception, [refreshAccess] runs; if it succeeds, whatever\n");
    code.push_str("/// pair the slot holds at that moment is replayed once. The slot is\n");
    code.push_str("/// last-write-wins: a call issued while the refresh is in flight is the\n");
    code.push_str("/// one that gets replayed.\n");
    code.push_str("class ClientApi {\n");
    code.push_str("  ClientApi(this._socket, {required this.refreshAccess}) {\n");
    code.push_str("    _socket.on('exception', (dynamic _) => _replayAfterRefresh());\n");
    code.push_str("  }\n\n");
    code.push_str("  final io.Socket _socket;\n");
    code.push_str("  final Future<bool> Function() refreshAccess;\n\n");
    code.push_str("  String? _lastEvent;\n");
    code.push_str("  Map<String, dynamic>? _lastPayload;\n\n");

    for (event, payload) in &api.server_entrypoints {
        let ack = api
            .server_acks
            .get(event)
            .map_or("dynamic", |kind| ack_type(*kind));
        code.push_str(&format!(
            "  Future<{ack}> {event}({payload} body) async {{\n"
        ));
        code.push_str(&format!(
            "    return await _send('{event}', body.toJson()) as {ack};\n"
        ));
        code.push_str("  }\n\n");
    }

    code.push_str("  Future<dynamic> _send(String event, Map<String, dynamic> payload) {\n");
    code.push_str("    _lastEvent = event;\n");
    code.push_str("    _lastPayload = payload;\n");
    code.push_str("    final completer = Completer<dynamic>();\n");
    code.push_str("    _socket.emitWithAck(event, payload, ack: completer.complete);\n");
    code.push_str("    return completer.future;\n");
    code.push_str("  }\n\n");

    code.push_str("  Future<void> _replayAfterRefresh() async {\n");
    code.push_str("    final refreshed = await refreshAccess();\n");
    code.push_str("    if (!refreshed) {\n      return;\n    }\n");
    code.push_str("    // Read the slot only after the refresh resolves: a newer call issued\n");
    code.push_str("    // meanwhile must be the one replayed.\n");
    code.push_str("    final event = _lastEvent;\n");
    code.push_str("    final payload = _lastPayload;\n");
    code.push_str("    if (event != null && payload != null) {\n");
    code.push_str("      _socket.emit(event, payload);\n");
    code.push_str("    }\n");
    code.push_str("  }\n}\n");

    code
}

fn ack_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => "String?",
        ScalarKind::Number => "num?",
        ScalarKind::Boolean => "bool?",
    }
}

#[cfg(test)]
mod dart_api_tests;
