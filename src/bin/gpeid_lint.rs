//! Lint text files for invalid gpEID identifiers.
//!
//! Usage:
//!   gpeid_lint [OPTIONS] [FILE ...]
//!   gpeid_lint < file.txt
//!
//! Scans each input for gpEID-shaped tokens, validates them against the
//! grammar, and prints one finding per diagnostic.
//!
//! Options:
//!   --human, -H  Human-readable output
//!
//! If no files are given, reads from stdin. Exit code 1 if any error-level
//! findings (warnings alone do not fail the run).

use gpeid::{lint, lint_path, DiagnosticKind, LintMessage, Severity};
use std::io::{self, Read};
use std::path::Path;

fn rule_id(kind: &DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::MissingLocationPrefix => "missing-location-prefix",
        DiagnosticKind::MissingRootLocation => "missing-root-location",
        DiagnosticKind::InvalidRootLocation => "invalid-root-location",
        DiagnosticKind::MissingFunctionPrefix => "missing-function-prefix",
        DiagnosticKind::InvalidFunctionSegment => "invalid-function-segment",
        DiagnosticKind::MissingTypePrefix => "missing-type-prefix",
        DiagnosticKind::InvalidTypeCore => "invalid-type-core",
        DiagnosticKind::MissingCounterSeparator => "missing-counter-separator",
        DiagnosticKind::InvalidCounter => "invalid-counter",
        DiagnosticKind::ZeroCounterNotAllowed => "zero-counter-not-allowed",
        DiagnosticKind::MissingProductPrefix => "missing-product-prefix",
        DiagnosticKind::InvalidManufacturer => "invalid-manufacturer",
        DiagnosticKind::MissingProductSeparator => "missing-product-separator",
        DiagnosticKind::InvalidProduct => "invalid-product",
        DiagnosticKind::TrailingCharacters(_) => "trailing-characters",
    }
}

#[derive(Clone, Copy)]
enum OutputStyle {
    Compact,
    Human,
}

fn print_message(path: &str, m: &LintMessage, style: OutputStyle) {
    let severity_str = match m.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    match style {
        OutputStyle::Compact => {
            println!(
                "{}:{}:{}: {}: {} [{}]",
                path,
                m.line,
                m.column,
                severity_str,
                m.message,
                rule_id(&m.kind)
            );
        }
        OutputStyle::Human => {
            println!("  {} {}:{}: {}", path, m.line, m.column, m.message);
            println!("    rule: {}", rule_id(&m.kind));
        }
    }
}

fn main() -> anyhow::Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let style = if let Some(pos) = args.iter().position(|a| a == "--human" || a == "-H") {
        args.remove(pos);
        OutputStyle::Human
    } else {
        OutputStyle::Compact
    };

    let mut has_error = false;
    let mut total_warnings = 0usize;
    let mut total_errors = 0usize;

    if args.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        let messages = lint(&text);
        for m in &messages {
            match m.severity {
                Severity::Error => total_errors += 1,
                Severity::Warning => total_warnings += 1,
            }
            print_message("<stdin>", m, style);
        }
        if messages.iter().any(|m| m.severity == Severity::Error) {
            has_error = true;
        }
    } else {
        for path in &args {
            let path = Path::new(path);
            let messages = match lint_path(path) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("{}: {}", path.display(), e);
                    has_error = true;
                    continue;
                }
            };
            let display_path = path.display().to_string();
            for m in &messages {
                match m.severity {
                    Severity::Error => total_errors += 1,
                    Severity::Warning => total_warnings += 1,
                }
                print_message(&display_path, m, style);
            }
            if messages.iter().any(|m| m.severity == Severity::Error) {
                has_error = true;
            }
        }
    }

    if total_errors > 0 || total_warnings > 0 {
        eprintln!(
            "lint: {} error(s), {} warning(s)",
            total_errors, total_warnings
        );
    }
    if has_error {
        std::process::exit(1);
    }
    Ok(())
}
