//! Scan free text for gpEID-shaped candidate tokens.
//!
//! The scanner only looks for the coarse shape (`=`…`+`…`_`…`:`… with
//! optional `-`/`$`/`|` blocks, delimited by whitespace, comma, or
//! semicolon); every candidate still has to pass the grammar engine in
//! [`crate::parser`]. Splitting the two keeps the engine position-exact and
//! the scan cheap over large documents.

use once_cell::sync::Lazy;
use regex::Regex;

static CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[\s,;])(=[^\s,;]+\+[^\s,;]+_[^\s,;]+:[^\s,;]+(?:[-$|][^\s,;]+)*)")
        .expect("candidate pattern is well-formed")
});

/// A candidate token found in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    /// 0-based line index.
    pub line: usize,
    /// 0-based character column of the first char (`=`) within the line.
    pub column: usize,
}

/// Find all gpEID-shaped substrings, line by line, in document order.
pub fn candidates(text: &str) -> Vec<Candidate<'_>> {
    let mut out = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        for caps in CANDIDATE.captures_iter(line) {
            let Some(m) = caps.get(1) else { continue };
            // Columns are counted in characters: identifiers and surrounding
            // prose may carry non-ASCII letters.
            let column = line[..m.start()].chars().count();
            out.push(Candidate {
                text: m.as_str(),
                line: line_no,
                column,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_candidate_at_line_start() {
        let found = candidates("=A+HLK_S.001:V.P");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "=A+HLK_S.001:V.P");
        assert_eq!((found[0].line, found[0].column), (0, 0));
    }

    #[test]
    fn finds_candidates_after_delimiters() {
        let text = "see =A+HLK_S.001:V.P, =B+TBD_T.002:V.P; done";
        let found = candidates(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].column, 4);
        assert_eq!(found[1].text, "=B+TBD_T.002:V.P");
    }

    #[test]
    fn ignores_text_without_the_coarse_shape() {
        assert!(candidates("no identifiers here, just = signs and +").is_empty());
        assert!(candidates("=missing_parts").is_empty());
    }

    #[test]
    fn column_counts_characters_not_bytes() {
        let found = candidates("Gebäude: =A+HLK_S.001:V.P");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].column, 9);
    }

    #[test]
    fn keeps_extension_blocks_attached() {
        let found = candidates("x =A+HLK_S.001:V.P-Cfg.v1$Ser.9 y");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "=A+HLK_S.001:V.P-Cfg.v1$Ser.9");
    }

    #[test]
    fn reports_line_numbers() {
        let found = candidates("line one\n=A+HLK_S.001:V.P\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 1);
    }
}
