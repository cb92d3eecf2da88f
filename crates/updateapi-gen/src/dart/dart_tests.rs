#![allow(non_snake_case)]
#![allow(clippy::unwrap_used)]

use super::*;
use proptest::prelude::*;
use updateapi_schema::{EnumSpec, FieldKind, FieldSpec, RecordSpec, ScalarKind, SchemaModel};

fn foo_schema() -> SchemaModel {
    // The canonical example: Foo { id: string, score: number, tags?: string[] }.
    let mut schema = SchemaModel::new();
    schema
        .insert_record(RecordSpec {
            name: "Foo".to_string(),
            fields: vec![
                FieldSpec {
                    name: "id".to_string(),
                    kind: FieldKind::Scalar(ScalarKind::String),
                    optional: false,
                },
                FieldSpec {
                    name: "score".to_string(),
                    kind: FieldKind::Scalar(ScalarKind::Number),
                    optional: false,
                },
                FieldSpec {
                    name: "tags".to_string(),
                    kind: FieldKind::ScalarArray(ScalarKind::String),
                    optional: true,
                },
            ],
        })
        .unwrap();
    schema
}

#[test]
fn generate_dart_dtos___foo_example___emits_full_class() {
    let code = generate_dart_dtos(&foo_schema());

    assert!(code.contains("class Foo {"));
    assert!(code.contains("required this.id,"));
    assert!(code.contains("required this.score,"));
    assert!(code.contains("this.tags,"));
    assert!(code.contains("id: json['id'] as String,"));
    assert!(code.contains("score: (json['score'] as num).toInt(),"));
    assert!(code.contains(
        "tags: json['tags'] == null ? null : (json['tags'] as List<dynamic>).map((e) => e as String).toList(),"
    ));
    assert!(code.contains("String id;"));
    assert!(code.contains("int score;"));
    assert!(code.contains("List<String>? tags;"));
    assert!(code.contains("'id': id,"));
    assert!(code.contains("if (tags != null) 'tags': tags,"));
}

#[test]
fn generate_dart_dtos___patch___merges_per_present_field() {
    let code = generate_dart_dtos(&foo_schema());

    // Required fields always take the other value; optional fields keep the
    // current value when the other side is absent.
    assert!(code.contains("void patch(Foo other) {"));
    assert!(code.contains("id = other.id;"));
    assert!(code.contains("score = other.score;"));
    assert!(code.contains("tags = other.tags ?? tags;"));
}

#[test]
fn generate_dart_dtos___float_suffix___selects_double() {
    let mut schema = SchemaModel::new();
    schema
        .insert_record(RecordSpec {
            name: "LocationDto".to_string(),
            fields: vec![
                FieldSpec {
                    name: "lat_float".to_string(),
                    kind: FieldKind::Scalar(ScalarKind::Number),
                    optional: false,
                },
                FieldSpec {
                    name: "accuracy".to_string(),
                    kind: FieldKind::Scalar(ScalarKind::Number),
                    optional: false,
                },
            ],
        })
        .unwrap();

    let code = generate_dart_dtos(&schema);

    assert!(code.contains("double latFloat;"));
    assert!(code.contains("latFloat: (json['latFloat'] as num).toDouble(),"));
    assert!(code.contains("int accuracy;"));
    assert!(code.contains("accuracy: (json['accuracy'] as num).toInt(),"));
}

#[test]
fn generate_dart_dtos___enums___use_byName_lookup() {
    let mut schema = SchemaModel::new();
    schema
        .insert_enum(EnumSpec {
            name: "ChallengeState".to_string(),
            members: vec!["Pending".to_string(), "Active".to_string()],
        })
        .unwrap();
    schema
        .insert_record(RecordSpec {
            name: "ChallengeDto".to_string(),
            fields: vec![
                FieldSpec {
                    name: "state".to_string(),
                    kind: FieldKind::Enum("ChallengeState".to_string()),
                    optional: false,
                },
                FieldSpec {
                    name: "history".to_string(),
                    kind: FieldKind::EnumArray("ChallengeState".to_string()),
                    optional: true,
                },
            ],
        })
        .unwrap();

    let code = generate_dart_dtos(&schema);

    assert!(code.contains("enum ChallengeState {\n  Pending,\n  Active,\n}"));
    assert!(code.contains("state: ChallengeState.values.byName(json['state'] as String),"));
    assert!(code.contains("'state': state.name,"));
    assert!(code.contains("if (history != null) 'history': history?.map((e) => e.name).toList(),"));
}

#[test]
fn generate_dart_dtos___nested_records___recurse_through_fromJson() {
    let mut schema = SchemaModel::new();
    schema
        .insert_record(RecordSpec {
            name: "LocationDto".to_string(),
            fields: vec![],
        })
        .unwrap();
    schema
        .insert_record(RecordSpec {
            name: "EventDto".to_string(),
            fields: vec![
                FieldSpec {
                    name: "location".to_string(),
                    kind: FieldKind::Record("LocationDto".to_string()),
                    optional: false,
                },
                FieldSpec {
                    name: "waypoints".to_string(),
                    kind: FieldKind::RecordArray("LocationDto".to_string()),
                    optional: false,
                },
            ],
        })
        .unwrap();

    let code = generate_dart_dtos(&schema);

    assert!(code.contains("location: LocationDto.fromJson(json['location'] as Map<String, dynamic>),"));
    assert!(code.contains(
        "waypoints: (json['waypoints'] as List<dynamic>).map((e) => LocationDto.fromJson(e as Map<String, dynamic>)).toList(),"
    ));
    assert!(code.contains("'location': location.toJson(),"));
    assert!(code.contains("'waypoints': waypoints.map((e) => e.toJson()).toList(),"));
}

#[test]
fn generate_dart_dtos___empty_record___has_plain_constructor() {
    let mut schema = SchemaModel::new();
    schema
        .insert_record(RecordSpec {
            name: "PingDto".to_string(),
            fields: vec![],
        })
        .unwrap();

    let code = generate_dart_dtos(&schema);

    assert!(code.contains("PingDto();"));
    assert!(code.contains("return PingDto(\n    );"));
}

#[test]
fn generate_dart_dtos___starts_with_banner() {
    let code = generate_dart_dtos(&SchemaModel::new());

    assert!(code.starts_with("// GENERATED FILE"));
}

proptest! {
    // Declaration order must survive into the constructor, the field
    // declarations, fromJson and toJson alike.
    #[test]
    fn generate_dart_dtos___field_order_is_preserved(count in 2usize..8) {
        let fields: Vec<FieldSpec> = (0..count)
            .map(|i| FieldSpec {
                name: format!("field_{i}"),
                kind: FieldKind::Scalar(ScalarKind::String),
                optional: false,
            })
            .collect();
        let mut schema = SchemaModel::new();
        schema
            .insert_record(RecordSpec {
                name: "OrderedDto".to_string(),
                fields,
            })
            .unwrap();

        let code = generate_dart_dtos(&schema);

        let positions: Vec<usize> = (0..count)
            .map(|i| code.find(&format!("String field{i};")).unwrap())
            .collect();
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
