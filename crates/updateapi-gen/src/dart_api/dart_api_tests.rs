#![allow(non_snake_case)]
#![allow(clippy::unwrap_used)]

use super::*;
use updateapi_schema::ApiModel;

fn sample_api() -> ApiModel {
    let mut api = ApiModel::new();
    api.client_entrypoints
        .insert("challengeUpdated".to_string(), "ChallengeDto".to_string());
    api.client_entrypoints
        .insert("teamScoreChanged".to_string(), "TeamScoreDto".to_string());
    api.insert_server_entrypoint("updateChallenge", "UpdateChallengeDto", ScalarKind::String);
    api.insert_server_entrypoint("joinTeam", "JoinTeamDto", ScalarKind::Boolean);
    api
}

#[test]
fn generate_server_events___emits_one_stream_per_event() {
    let code = generate_server_events(&sample_api());

    assert!(code.contains("final _challengeUpdated = StreamController<ChallengeDto>.broadcast();"));
    assert!(code.contains("Stream<ChallengeDto> get challengeUpdated => _challengeUpdated.stream;"));
    assert!(code.contains(
        "_challengeUpdated.add(ChallengeDto.fromJson(data as Map<String, dynamic>));"
    ));
    assert!(code.contains("_socket.on('teamScoreChanged', (dynamic data) {"));
}

#[test]
fn generate_server_events___always_emits_lifecycle_streams() {
    // Even with no application events, the four lifecycle streams exist.
    let code = generate_server_events(&ApiModel::new());

    for stream in ["connected", "disconnected", "reconnecting", "reconnected"] {
        assert!(code.contains(&format!("Stream<void> get {stream} => _{stream}.stream;")));
    }
    assert!(code.contains("_socket.onConnect((_) => _connected.add(null));"));
    assert!(code.contains("_socket.onDisconnect((_) => _disconnected.add(null));"));
    assert!(code.contains("_socket.onReconnectAttempt((_) => _reconnecting.add(null));"));
    assert!(code.contains("_socket.onReconnect((_) => _reconnected.add(null));"));
}

#[test]
fn generate_client_api___emits_typed_methods_with_ack_types() {
    let code = generate_client_api(&sample_api());

    assert!(code.contains("Future<String?> updateChallenge(UpdateChallengeDto body) async {"));
    assert!(code.contains("return await _send('updateChallenge', body.toJson()) as String?;"));
    assert!(code.contains("Future<bool?> joinTeam(JoinTeamDto body) async {"));
}

#[test]
fn generate_client_api___records_slot_before_every_emit() {
    let code = generate_client_api(&sample_api());

    // The slot write happens inside _send, before the transmit.
    let send = code.find("Future<dynamic> _send(").unwrap();
    let last_event = code.find("_lastEvent = event;").unwrap();
    let last_payload = code.find("_lastPayload = payload;").unwrap();
    let emit = code.find("_socket.emitWithAck(event, payload").unwrap();
    assert!(send < last_event);
    assert!(last_event < last_payload);
    assert!(last_payload < emit);
}

#[test]
fn generate_client_api___replay_reads_slot_after_refresh_resolves() {
    // Last-write-wins: the slot must be read after the await so that a call
    // issued during the refresh is the one replayed.
    let code = generate_client_api(&sample_api());

    let refresh = code.find("await refreshAccess();").unwrap();
    let read_event = code.find("final event = _lastEvent;").unwrap();
    let read_payload = code.find("final payload = _lastPayload;").unwrap();
    let replay = code.find("_socket.emit(event, payload);").unwrap();
    assert!(refresh < read_event);
    assert!(read_event < read_payload);
    assert!(read_payload < replay);
}

#[test]
fn generate_client_api___replays_exactly_once_per_exception() {
    let code = generate_client_api(&sample_api());

    // One replay site in the whole artifact.
    assert_eq!(code.matches("_socket.emit(event, payload);").count(), 1);
}
