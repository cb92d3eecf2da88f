//! Client-event mapping scanner.
//!
//! The client-receivable surface is declared once, as a struct with the fixed
//! name [`crate::CLIENT_EVENTS_TYPE`]: one field per event, snake_case field
//! name (camelCased on the wire), field type naming the payload DTO.

use crate::gateway::{ApiScan, warn_skip};
use crate::typeref::{TypeShape, render_type, shape_of};
use crate::CLIENT_EVENTS_TYPE;
use updateapi_schema::DiagnosticCode;
use updateapi_schema::naming::to_camel_case;

/// Fold every `ClientEvents` declaration in `file` into the scan.
pub(crate) fn collect_client_events(file: &syn::File, scan: &mut ApiScan) {
    for item in &file.items {
        let syn::Item::Struct(s) = item else {
            continue;
        };
        if s.ident != CLIENT_EVENTS_TYPE {
            continue;
        }
        let syn::Fields::Named(named) = &s.fields else {
            continue;
        };

        for field in &named.named {
            let Some(ident) = &field.ident else {
                continue;
            };
            let event = to_camel_case(&ident.to_string());

            let TypeShape::Named(payload) = shape_of(&field.ty) else {
                warn_skip(
                    scan,
                    DiagnosticCode::UnsupportedField,
                    &event,
                    render_type(&field.ty),
                );
                continue;
            };

            if scan.api.client_entrypoints.contains_key(&event) {
                warn_skip(
                    scan,
                    DiagnosticCode::DuplicateEvent,
                    &event,
                    payload,
                );
                continue;
            }
            scan.api.client_entrypoints.insert(event, payload);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    #![allow(clippy::unwrap_used)]

    use crate::gateway::scan_api_sources;
    use updateapi_schema::DiagnosticCode;

    #[test]
    fn collect_client_events___maps_fields_to_camel_case_events() {
        let scan = scan_api_sources(
            &[],
            &[(
                "client.events.rs",
                r#"
                pub struct ClientEvents {
                    pub challenge_updated: ChallengeDto,
                    pub team_score_changed: contracts::TeamScoreDto,
                }
                "#,
            )],
        )
        .unwrap();

        assert_eq!(
            scan.api.client_entrypoints.get("challengeUpdated").unwrap(),
            "ChallengeDto"
        );
        assert_eq!(
            scan.api.client_entrypoints.get("teamScoreChanged").unwrap(),
            "TeamScoreDto"
        );
    }

    #[test]
    fn collect_client_events___ignores_other_structs() {
        let scan = scan_api_sources(
            &[],
            &[(
                "client.events.rs",
                r#"
                pub struct SomethingElse {
                    pub challenge_updated: ChallengeDto,
                }
                "#,
            )],
        )
        .unwrap();

        assert!(scan.api.client_entrypoints.is_empty());
    }

    #[test]
    fn collect_client_events___duplicate_event___keeps_first() {
        let scan = scan_api_sources(
            &[],
            &[
                (
                    "a.events.rs",
                    "pub struct ClientEvents { pub ping: PingDto }",
                ),
                (
                    "b.events.rs",
                    "pub struct ClientEvents { pub ping: OtherDto }",
                ),
            ],
        )
        .unwrap();

        assert_eq!(scan.api.client_entrypoints.get("ping").unwrap(), "PingDto");
        assert_eq!(scan.diagnostics.len(), 1);
        assert_eq!(scan.diagnostics[0].code, DiagnosticCode::DuplicateEvent);
    }

    #[test]
    fn collect_client_events___non_path_payload___is_skipped() {
        let scan = scan_api_sources(
            &[],
            &[(
                "client.events.rs",
                "pub struct ClientEvents { pub ping: (String, u32) }",
            )],
        )
        .unwrap();

        assert!(scan.api.client_entrypoints.is_empty());
        assert_eq!(scan.diagnostics[0].code, DiagnosticCode::UnsupportedField);
    }
}
