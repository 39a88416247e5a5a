//! # gpEID — validator and decomposer for gpEID asset identifiers
//!
//! gpEID strings tag physical and functional assets (building-automation
//! equipment and the like) by location, function, type, and product, with
//! optional free-form extensions:
//!
//! ```text
//! =Gebäude1.Nord+HLK_Sensor.001:Siemens.ABC123-Config.v1
//! │            │   │          │              │
//! OrtsID       FunktionsID    │   ProduktID  ZusatzID(s)
//!                  TypID (core + 3-digit counter)
//! ```
//!
//! The `TBD` placeholder ("value not yet determined") is allowed in most
//! segment positions, but never as the root location, and the counter `000`
//! is reserved.
//!
//! ## Usage
//!
//! ```
//! let result = gpeid::validate("=Gebäude1+HLK_Sensor.001:Siemens.ABC123");
//! assert!(result.is_valid());
//! let id = result.gpeid.unwrap();
//! assert_eq!(id.location, ["Gebäude1"]);
//! assert_eq!(id.type_id.counter, "001");
//! ```
//!
//! Invalid inputs come back with positioned diagnostics instead:
//!
//! ```
//! let result = gpeid::validate("Gebäude1+HLK_Sensor.001:Siemens.ABC123");
//! assert!(!result.is_valid());
//! assert_eq!(result.diagnostics[0].offset, 0);
//! ```
//!
//! The [`scan`] and [`lint`] modules find and check gpEID-shaped tokens in
//! free text; the `gpeid_lint` and `gpeid_check` binaries wrap them for the
//! command line.

pub mod ident;
pub mod lint;
pub mod parser;
pub mod scan;

pub use ident::{Extension, Gpeid, ProductId, TypeId};
pub use lint::{lint, lint_path, LintMessage, Severity};
pub use parser::{validate, Diagnostic, DiagnosticKind, Validation, PLACEHOLDER};
pub use scan::{candidates, Candidate};
