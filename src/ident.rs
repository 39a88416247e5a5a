//! Decomposed gpEID: location, function, type, product, and extensions.
//!
//! Field and type names follow the gpEID nomenclature: OrtsID (location),
//! FunktionsID (function), TypID (type core + Zaehl counter), ProduktID
//! (manufacturer and product), ZusatzIDs (extensions).

use std::fmt;

/// A fully decomposed, valid gpEID.
///
/// `Display` reconstructs the canonical identifier string; [`Gpeid::summary`]
/// renders the hover-style per-component breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gpeid {
    /// Location hierarchy. The first segment (Liegenschaft) is never `TBD`
    /// and never empty; later segments may be `TBD` or empty (a gap).
    pub location: Vec<String>,
    /// Function codes: each segment is `TBD` or exactly 3 uppercase letters.
    pub function: Vec<String>,
    pub type_id: TypeId,
    pub product: ProductId,
    pub extensions: Vec<Extension>,
}

/// TypID: dot-separated core segments plus the 3-digit Zaehl counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeId {
    /// Non-empty; each segment is `TBD` or alphanumeric with at least one letter.
    pub core: Vec<String>,
    /// Exactly 3 digits, never `000`.
    pub counter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductId {
    pub manufacturer: String,
    pub product: String,
}

/// One ZusatzID block: a separator and its dot-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// One of `-`, `$`, `|`.
    pub separator: char,
    pub parts: Vec<String>,
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}.{}", self.core.join("."), self.counter)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}.{}", self.manufacturer, self.product)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.separator, self.parts.join("."))
    }
}

impl fmt::Display for Gpeid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "={}", self.location.join("."))?;
        write!(f, "+{}", self.function.join("."))?;
        write!(f, "{}{}", self.type_id, self.product)?;
        for ext in &self.extensions {
            write!(f, "{ext}")?;
        }
        Ok(())
    }
}

impl Gpeid {
    /// Multi-line per-component breakdown, extensions space-joined. This is
    /// the rendering hover-style consumers display next to an identifier.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Location:   ={}", self.location.join(".")),
            format!("Function:   +{}", self.function.join(".")),
            format!("Type:       {}", self.type_id),
            format!("Product:    {}", self.product),
        ];
        if !self.extensions.is_empty() {
            let rendered: Vec<String> = self.extensions.iter().map(|e| e.to_string()).collect();
            lines.push(format!("Extensions: {}", rendered.join(" ")));
        }
        lines.join("\n")
    }
}
