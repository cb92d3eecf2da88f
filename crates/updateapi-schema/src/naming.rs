//! Naming conventions shared by the scanners and the generators.
//!
//! Declared field names are snake_case Rust identifiers; the wire (and the
//! generated Dart/TypeScript members) use their camelCase form. Synthesized
//! enum names are a model invariant: the same record/field pair must always
//! produce the same name, or repeated scans would not converge.

/// Suffix marking a scalar-number field as floating-point on the wire.
///
/// Checked against the camelCase wire name; every other scalar number is
/// integral.
pub const FLOAT_SUFFIX: &str = "Float";

/// Whether a wire name carries the floating-point marker.
pub fn is_float_name(wire_name: &str) -> bool {
    wire_name.ends_with(FLOAT_SUFFIX)
}

/// Deterministic name for an enum synthesized from an inline literal union.
pub fn synthesized_enum_name(record: &str, field: &str) -> String {
    format!("{}{}Dto", record, to_pascal_case(field))
}

/// Convert snake_case to camelCase.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push_str(&c.to_uppercase().to_string());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert snake_case or kebab-case to PascalCase.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn to_camel_case___converts_snake_case() {
        assert_eq!(to_camel_case("challenge_updated"), "challengeUpdated");
        assert_eq!(to_camel_case("simple"), "simple");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn to_pascal_case___converts_snake_and_kebab() {
        assert_eq!(to_pascal_case("score_kind"), "ScoreKind");
        assert_eq!(to_pascal_case("score-kind"), "ScoreKind");
        assert_eq!(to_pascal_case("score"), "Score");
    }

    #[test]
    fn synthesized_enum_name___is_deterministic() {
        let first = synthesized_enum_name("ChallengeDto", "state_kind");
        let second = synthesized_enum_name("ChallengeDto", "state_kind");

        assert_eq!(first, "ChallengeDtoStateKindDto");
        assert_eq!(first, second);
    }

    #[test]
    fn is_float_name___checks_suffix() {
        assert!(is_float_name("distanceFloat"));
        assert!(!is_float_name("distance"));
        assert!(!is_float_name("floatDistance"));
    }
}
