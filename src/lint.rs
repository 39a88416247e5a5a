//! Document linter: find gpEID candidates in free text and validate each.
//!
//! Every grammar diagnostic becomes a [`LintMessage`] with a 1-based
//! line/column position pointing at the offending character inside the
//! candidate. `ZeroCounterNotAllowed` is a warning (it always travels with an
//! `InvalidCounter` error for the same defect); everything else is an error.
//!
//! Run the linter via the `gpeid_lint` binary: `gpeid_lint notes.txt`
//! or pipe: `gpeid_lint < notes.txt`. Exit code 1 if any error-level findings.

use crate::parser::{validate, DiagnosticKind};
use crate::scan::candidates;
use std::io;
use std::path::Path;

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single lint finding with document location.
#[derive(Debug, Clone)]
pub struct LintMessage {
    /// 1-based line number.
    pub line: usize,
    /// 1-based character column.
    pub column: usize,
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

fn severity_of(kind: &DiagnosticKind) -> Severity {
    match kind {
        DiagnosticKind::ZeroCounterNotAllowed => Severity::Warning,
        _ => Severity::Error,
    }
}

/// Lint a whole document. Messages come back in document order.
pub fn lint(text: &str) -> Vec<LintMessage> {
    let mut out = Vec::new();
    for cand in candidates(text) {
        let result = validate(cand.text);
        for d in &result.diagnostics {
            out.push(LintMessage {
                line: cand.line + 1,
                column: cand.column + d.offset + 1,
                severity: severity_of(&d.kind),
                message: format!("invalid gpEID '{}': {}", cand.text, d.kind),
                kind: d.kind.clone(),
            });
        }
    }
    out
}

/// Read a file and lint its contents.
pub fn lint_path(path: &Path) -> io::Result<Vec<LintMessage>> {
    let text = std::fs::read_to_string(path)?;
    Ok(lint(&text))
}
