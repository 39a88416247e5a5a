//! Integration tests: scanning free text, linting documents and files, and
//! the rendering consumers see.

use gpeid::{candidates, lint, lint_path, validate, DiagnosticKind, Severity};
use std::io::Write;

const NOTES: &str = "\
Maintenance notes 2024-03
Replaced =Gebäude1+HLK_Sensor.001:Siemens.ABC123 after failure.
Pending: =Site1..Room5+TBD.HLK_TBD.TBD.005:TBD.TBD, parts ordered.
Broken tag =Building+HLK_123.001:Vendor.Product found on unit 7.
";

#[test]
fn scan_finds_all_shaped_tokens() {
    let found = candidates(NOTES);
    assert_eq!(found.len(), 3);
    assert_eq!(found[0].line, 1);
    assert_eq!(found[0].text, "=Gebäude1+HLK_Sensor.001:Siemens.ABC123");
    assert_eq!(found[1].text, "=Site1..Room5+TBD.HLK_TBD.TBD.005:TBD.TBD");
    assert_eq!(found[2].line, 3);
}

#[test]
fn lint_reports_only_the_broken_tag() {
    let msgs = lint(NOTES);
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].kind, DiagnosticKind::InvalidTypeCore);
    assert_eq!(msgs[0].severity, Severity::Error);
    assert_eq!(msgs[0].line, 4);
    // "Broken tag " is 11 chars, the candidate's bad segment is 14 chars in,
    // both 0-based; lint columns are 1-based.
    assert_eq!(msgs[0].column, 11 + 14 + 1);
    assert!(msgs[0].message.contains("invalid gpEID"));
}

#[test]
fn lint_path_round_trip() {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(NOTES.as_bytes()).expect("write");
    let msgs = lint_path(f.path()).expect("lint_path");
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].line, 4);
}

#[test]
fn lint_path_missing_file_is_an_io_error() {
    let err = lint_path(std::path::Path::new("/no/such/file.txt"));
    assert!(err.is_err());
}

#[test]
fn summary_renders_each_component() {
    let id = validate("=Haus+HLK_Sensor.001:Siemens.Model-Config.v1$Serial.12345")
        .gpeid
        .expect("valid");
    let summary = id.summary();
    assert!(summary.contains("=Haus"));
    assert!(summary.contains("+HLK"));
    assert!(summary.contains("_Sensor.001"));
    assert!(summary.contains(":Siemens.Model"));
    assert!(summary.contains("-Config.v1 $Serial.12345"));
}

#[test]
fn diagnostics_display_with_offsets() {
    let r = validate("=Building+HLK_Sensor.000:Vendor.Product");
    let rendered: Vec<String> = r.diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(rendered.len(), 2);
    assert!(rendered[0].contains("counter cannot be '000'"));
    assert!(rendered[0].contains("offset 21"));
}

#[test]
fn validator_tolerates_arbitrary_garbage() {
    // The scanner normally pre-filters, but the engine must accept anything.
    for junk in ["", "   ", "===", "=.+_:", "\u{0}\u{1}", "=+_:-$|", "日本語"] {
        let r = validate(junk);
        assert!(!r.is_valid(), "junk {junk:?} must not validate");
        assert!(!r.diagnostics.is_empty());
    }
}
