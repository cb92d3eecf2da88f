//! Non-fatal scan findings.

use serde::Serialize;
use std::fmt;

/// Why an item was skipped during scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// A record field whose type shape the scanner cannot transport.
    UnsupportedField,
    /// A field references a type name that no scanned file declares.
    UnknownTypeRef,
    /// `#[dto(one_of(..))]` on a field that is not `String`/`Vec<String>`.
    BadLiteralUnion,
    /// A gateway handler that is not an `async fn`.
    NonAsyncHandler,
    /// A gateway handler without a `#[message_body]` parameter.
    MissingBody,
    /// An ack type with more than one concrete member.
    AmbiguousAck,
    /// An ack type that does not reduce to string/number/boolean.
    NonPrimitiveAck,
    /// The same event name declared twice in the client event mapping.
    DuplicateEvent,
}

/// One skipped item: what was skipped, and why.
///
/// `subject` names the offending declaration (`Record.field`, an event name,
/// or a handler method); `detail` carries the shape that was rejected.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub subject: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, subject: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code,
            subject: subject.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.code {
            DiagnosticCode::UnsupportedField => "unsupported field shape",
            DiagnosticCode::UnknownTypeRef => "unknown type reference",
            DiagnosticCode::BadLiteralUnion => "invalid literal union",
            DiagnosticCode::NonAsyncHandler => "handler is not async",
            DiagnosticCode::MissingBody => "handler has no message body parameter",
            DiagnosticCode::AmbiguousAck => "ambiguous ack type",
            DiagnosticCode::NonPrimitiveAck => "non-primitive ack type",
            DiagnosticCode::DuplicateEvent => "duplicate event name",
        };
        write!(f, "{}: {} ({})", self.subject, what, self.detail)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn display___names_subject_and_reason() {
        let diag = Diagnostic::new(
            DiagnosticCode::UnsupportedField,
            "ChallengeDto.extras",
            "& str",
        );

        let text = diag.to_string();
        assert!(text.contains("ChallengeDto.extras"));
        assert!(text.contains("unsupported field shape"));
        assert!(text.contains("& str"));
    }
}
