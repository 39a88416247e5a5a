//! Recursive-descent grammar engine for gpEID strings.
//!
//! A gpEID is consumed left to right as five components over a single cursor:
//!
//! 1. OrtsID (`=` + dot-separated location hierarchy)
//! 2. FunktionsID (`+` + dot-separated 3-letter function codes)
//! 3. TypID (`_` + dot-separated type core + 3-digit counter)
//! 4. ProduktID (`:` + manufacturer `.` product)
//! 5. ZusatzIDs (zero or more `-`/`$`/`|` extension blocks)
//!
//! Anything left over after the extensions is rejected. The engine records
//! positioned diagnostics and aborts on the first hard failure; the
//! zero-counter case records a soft diagnostic first, so one defect can
//! produce two findings.
//!
//! Backtracking is bounded: every speculative consumption (a dot that may
//! belong to the counter, an extension separator with no token behind it)
//! saves the cursor first and restores it on failure.

use crate::ident::{Extension, Gpeid, ProductId, TypeId};
use std::fmt;

/// Reserved token meaning "value not yet determined". Allowed in most segment
/// positions, but never as the Liegenschaft (root location).
pub const PLACEHOLDER: &str = "TBD";

/// What went wrong, without the position. `Display` gives the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("expected '=' to start the OrtsID (location)")]
    MissingLocationPrefix,
    #[error("Liegenschaft (root location) cannot be 'TBD'")]
    MissingRootLocation,
    #[error("invalid Liegenschaft (root location)")]
    InvalidRootLocation,
    #[error("expected '+' to start the FunktionsID (function)")]
    MissingFunctionPrefix,
    #[error("invalid FunktionsID segment: expected 'TBD' or exactly 3 uppercase letters")]
    InvalidFunctionSegment,
    #[error("expected '_' to start the TypID (type)")]
    MissingTypePrefix,
    #[error("invalid TypID core: each segment needs at least one letter")]
    InvalidTypeCore,
    #[error("expected '.' before the counter in the TypID")]
    MissingCounterSeparator,
    #[error("invalid counter: expected exactly 3 digits")]
    InvalidCounter,
    #[error("counter cannot be '000'")]
    ZeroCounterNotAllowed,
    #[error("expected ':' to start the ProduktID (product)")]
    MissingProductPrefix,
    #[error("invalid manufacturer in the ProduktID")]
    InvalidManufacturer,
    #[error("expected '.' between manufacturer and product")]
    MissingProductSeparator,
    #[error("invalid product in the ProduktID")]
    InvalidProduct,
    #[error("unexpected characters after valid gpEID: '{0}'")]
    TrailingCharacters(String),
}

/// A single finding, positioned as a 0-based character offset into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub offset: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at offset {})", self.kind, self.offset)
    }
}

/// Outcome of [`validate`]: either a decomposition or a list of diagnostics.
#[derive(Debug, Clone)]
pub struct Validation {
    /// Empty exactly when the input is a valid gpEID.
    pub diagnostics: Vec<Diagnostic>,
    /// The decomposition; present only on full success.
    pub gpeid: Option<Gpeid>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Validate one candidate token against the gpEID grammar.
///
/// A fresh engine is built per call; no state is shared between calls.
pub fn validate(input: &str) -> Validation {
    Engine::new(input).run()
}

/// Hard failure marker. The diagnostic has already been recorded; rules
/// short-circuit on it and the driver stops running further rules.
struct Fail;

type Step<T> = Result<T, Fail>;

fn is_word_char(c: char) -> bool {
    // Unicode letters (general category L), but ASCII digits only.
    c.is_alphabetic() || c.is_ascii_digit()
}

struct Engine {
    chars: Vec<char>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Engine {
    fn new(input: &str) -> Self {
        Engine {
            chars: input.chars().collect(),
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    fn run(mut self) -> Validation {
        match self.gpeid() {
            Ok(gpeid) => {
                if self.pos < self.chars.len() {
                    let rest: String = self.chars[self.pos..].iter().collect();
                    let at = self.pos;
                    self.record(DiagnosticKind::TrailingCharacters(rest), at);
                }
                if self.diagnostics.is_empty() {
                    Validation {
                        diagnostics: Vec::new(),
                        gpeid: Some(gpeid),
                    }
                } else {
                    Validation {
                        diagnostics: self.diagnostics,
                        gpeid: None,
                    }
                }
            }
            Err(Fail) => Validation {
                diagnostics: self.diagnostics,
                gpeid: None,
            },
        }
    }

    fn gpeid(&mut self) -> Step<Gpeid> {
        let location = self.location()?;
        let function = self.function()?;
        let type_id = self.type_id()?;
        let product = self.product()?;
        let extensions = self.extensions();
        Ok(Gpeid {
            location,
            function,
            type_id,
            product,
            extensions,
        })
    }

    // ==================== OrtsID ====================

    fn location(&mut self) -> Step<Vec<String>> {
        if !self.eat('=') {
            return Err(self.fail(DiagnosticKind::MissingLocationPrefix));
        }
        if self.keyword_ahead(PLACEHOLDER) {
            return Err(self.fail(DiagnosticKind::MissingRootLocation));
        }
        let root = match self.word_run() {
            Some(w) => w,
            None => return Err(self.fail(DiagnosticKind::InvalidRootLocation)),
        };
        let mut parts = vec![root];
        while self.peek() == Some('.') {
            self.bump();
            match self.peek() {
                // Two separators in a row: an intentionally empty segment (a
                // "gap") that preserves the positional hierarchy.
                Some('.' | '+' | '_' | ':') => parts.push(String::new()),
                _ => {
                    if let Some(p) = self.placeholder() {
                        parts.push(p);
                    } else if let Some(w) = self.word_run() {
                        parts.push(w);
                    }
                    // An unparseable tail segment contributes nothing; the
                    // loop condition decides what happens at the next char.
                }
            }
        }
        Ok(parts)
    }

    // ==================== FunktionsID ====================

    fn function(&mut self) -> Step<Vec<String>> {
        if !self.eat('+') {
            return Err(self.fail(DiagnosticKind::MissingFunctionPrefix));
        }
        let mut parts = Vec::new();
        match self.function_segment() {
            Some(p) => parts.push(p),
            None => return Err(self.fail(DiagnosticKind::InvalidFunctionSegment)),
        }
        while self.peek() == Some('.') {
            self.bump();
            match self.function_segment() {
                Some(p) => parts.push(p),
                None => return Err(self.fail(DiagnosticKind::InvalidFunctionSegment)),
            }
        }
        Ok(parts)
    }

    fn function_segment(&mut self) -> Option<String> {
        if let Some(p) = self.placeholder() {
            return Some(p);
        }
        self.function_code()
    }

    /// Exactly 3 uppercase ASCII letters, and the character after them must
    /// be a delimiter or the end of input. A fourth letter invalidates the
    /// segment rather than splitting it.
    fn function_code(&mut self) -> Option<String> {
        let mark = self.pos;
        let mut count = 0;
        while count < 3 {
            match self.peek() {
                Some(c) if c.is_ascii_uppercase() => {
                    self.bump();
                    count += 1;
                }
                _ => break,
            }
        }
        if count == 3 {
            match self.peek() {
                None | Some('.' | '_' | ':' | '-' | '$' | '|') => {
                    return Some(self.chars[mark..self.pos].iter().collect());
                }
                _ => {}
            }
        }
        self.pos = mark;
        None
    }

    // ==================== TypID ====================

    fn type_id(&mut self) -> Step<TypeId> {
        if !self.eat('_') {
            return Err(self.fail(DiagnosticKind::MissingTypePrefix));
        }
        let core = self.type_core();
        if core.is_empty() {
            return Err(self.fail(DiagnosticKind::InvalidTypeCore));
        }
        if !self.eat('.') {
            return Err(self.fail(DiagnosticKind::MissingCounterSeparator));
        }
        let counter = match self.counter() {
            Some(c) => c,
            None => return Err(self.fail(DiagnosticKind::InvalidCounter)),
        };
        Ok(TypeId { core, counter })
    }

    fn type_core(&mut self) -> Vec<String> {
        let mut parts = Vec::new();
        match self.type_segment() {
            Some(p) => parts.push(p),
            None => return parts,
        }
        // The dot before the counter looks like a core separator. Only keep
        // consuming core segments while the character after the dot is not a
        // digit; the last dot before a digit run belongs to the counter.
        while self.peek() == Some('.') && matches!(self.peek_at(1), Some(c) if !c.is_ascii_digit())
        {
            let mark = self.pos;
            self.bump();
            match self.type_segment() {
                Some(p) => parts.push(p),
                None => {
                    // Re-read the dot as the counter separator.
                    self.pos = mark;
                    break;
                }
            }
        }
        parts
    }

    fn type_segment(&mut self) -> Option<String> {
        if let Some(p) = self.placeholder() {
            return Some(p);
        }
        self.lettered_run()
    }

    /// Alphanumeric run containing at least one letter. Purely numeric runs
    /// are rejected so a type segment can never be mistaken for a counter.
    fn lettered_run(&mut self) -> Option<String> {
        let mark = self.pos;
        let mut has_letter = false;
        while let Some(c) = self.peek() {
            if !is_word_char(c) {
                break;
            }
            if c.is_alphabetic() {
                has_letter = true;
            }
            self.bump();
        }
        if self.pos > mark && has_letter {
            Some(self.chars[mark..self.pos].iter().collect())
        } else {
            self.pos = mark;
            None
        }
    }

    /// Exactly 3 ASCII digits, not the literal `000`. A zero counter records
    /// a diagnostic of its own and still counts as absent, so the enclosing
    /// rule adds `InvalidCounter` on top (two findings for one defect).
    fn counter(&mut self) -> Option<String> {
        let mark = self.pos;
        let mut count = 0;
        while count < 3 {
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    self.bump();
                    count += 1;
                }
                _ => break,
            }
        }
        if count == 3 {
            let digits: String = self.chars[mark..self.pos].iter().collect();
            if digits != "000" {
                return Some(digits);
            }
            self.record(DiagnosticKind::ZeroCounterNotAllowed, mark);
        }
        self.pos = mark;
        None
    }

    // ==================== ProduktID ====================

    fn product(&mut self) -> Step<ProductId> {
        if !self.eat(':') {
            return Err(self.fail(DiagnosticKind::MissingProductPrefix));
        }
        let manufacturer = match self.product_token() {
            Some(t) => t,
            None => return Err(self.fail(DiagnosticKind::InvalidManufacturer)),
        };
        if !self.eat('.') {
            return Err(self.fail(DiagnosticKind::MissingProductSeparator));
        }
        let product = match self.product_token() {
            Some(t) => t,
            None => return Err(self.fail(DiagnosticKind::InvalidProduct)),
        };
        Ok(ProductId {
            manufacturer,
            product,
        })
    }

    fn product_token(&mut self) -> Option<String> {
        if let Some(p) = self.placeholder() {
            return Some(p);
        }
        self.word_run()
    }

    // ==================== ZusatzIDs ====================

    fn extensions(&mut self) -> Vec<Extension> {
        let mut out = Vec::new();
        while self.pos < self.chars.len() {
            match self.extension() {
                Some(e) => out.push(e),
                None => break,
            }
        }
        out
    }

    /// One `-`/`$`/`|` block. A separator with no valid token behind it is
    /// not an error: the separator is given back and the sequence just ends.
    fn extension(&mut self) -> Option<Extension> {
        let mark = self.pos;
        let separator = match self.peek() {
            Some(c @ ('-' | '$' | '|')) => {
                self.bump();
                c
            }
            _ => return None,
        };
        let parts = self.extension_parts();
        if parts.is_empty() {
            self.pos = mark;
            return None;
        }
        Some(Extension { separator, parts })
    }

    fn extension_parts(&mut self) -> Vec<String> {
        let mut parts = Vec::new();
        match self.word_run() {
            Some(p) => parts.push(p),
            None => return parts,
        }
        while self.peek() == Some('.') {
            let mark = self.pos;
            self.bump();
            match self.word_run() {
                Some(p) => parts.push(p),
                None => {
                    // No trailing-empty tokens here, unlike the location gap
                    // rule: give the dot back and end the sequence.
                    self.pos = mark;
                    break;
                }
            }
        }
        parts
    }

    // ==================== Cursor primitives ====================

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            return true;
        }
        false
    }

    /// Longest run of Unicode letters / ASCII digits, or `None` if empty.
    fn word_run(&mut self) -> Option<String> {
        let mark = self.pos;
        while matches!(self.peek(), Some(c) if is_word_char(c)) {
            self.bump();
        }
        if self.pos > mark {
            Some(self.chars[mark..self.pos].iter().collect())
        } else {
            None
        }
    }

    /// Does `word` start at the cursor as a whole token? `TBDx` is an
    /// ordinary token, not the placeholder followed by an `x`.
    fn keyword_ahead(&self, word: &str) -> bool {
        let mut i = self.pos;
        for w in word.chars() {
            if self.chars.get(i) != Some(&w) {
                return false;
            }
            i += 1;
        }
        !self.chars.get(i).is_some_and(|&c| is_word_char(c))
    }

    /// Consume the `TBD` placeholder if it is ahead as a whole token.
    fn placeholder(&mut self) -> Option<String> {
        if self.keyword_ahead(PLACEHOLDER) {
            self.pos += PLACEHOLDER.len();
            return Some(PLACEHOLDER.to_string());
        }
        None
    }

    fn fail(&mut self, kind: DiagnosticKind) -> Fail {
        let at = self.pos;
        self.record(kind, at);
        Fail
    }

    fn record(&mut self, kind: DiagnosticKind, offset: usize) {
        self.diagnostics.push(Diagnostic { kind, offset });
    }
}
