//! Run summary: counts plus every diagnostic.

use serde::Serialize;
use std::fmt;
use updateapi_schema::Diagnostic;

#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub records: usize,
    pub enums: usize,
    pub promoted_unions: usize,
    pub client_entrypoints: usize,
    pub server_entrypoints: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl Summary {
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scanned {} records, {} enums ({} promoted from literal unions)",
            self.records, self.enums, self.promoted_unions
        )?;
        writeln!(
            f,
            "Entrypoints: {} client, {} server",
            self.client_entrypoints, self.server_entrypoints
        )?;
        if self.diagnostics.is_empty() {
            writeln!(f, "No warnings")?;
        } else {
            writeln!(f, "{} warning(s):", self.diagnostics.len())?;
            for diag in &self.diagnostics {
                writeln!(f, "  - {diag}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use updateapi_schema::DiagnosticCode;

    #[test]
    fn display___lists_counts_and_warnings() {
        let summary = Summary {
            records: 7,
            enums: 3,
            promoted_unions: 1,
            client_entrypoints: 4,
            server_entrypoints: 5,
            diagnostics: vec![Diagnostic::new(
                DiagnosticCode::NonAsyncHandler,
                "updateChallenge",
                "update_challenge",
            )],
        };

        let text = summary.to_string();
        assert!(text.contains("7 records"));
        assert!(text.contains("4 client, 5 server"));
        assert!(text.contains("1 warning(s):"));
        assert!(text.contains("updateChallenge"));
    }
}
