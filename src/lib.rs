//! # pen-oid
//!
//! Typed model for IANA Private Enterprise Number (PEN) object identifiers:
//! dotted identifiers of the form `1.3.6.1.4.1.<pen>[.<arc>...]`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! registry  → PEN assignment records, registry field normalization
//!   ↓
//! generate  → Lazy and parallel subtree enumeration
//!   ↓
//! oid       → PenOid value: parse, format, compare, navigate, build
//!   ↓
//! base      → Constants of the enterprise arc, OidError
//! ```
//!
//! ## Example
//!
//! ```
//! use pen_oid::PenOid;
//!
//! let oid: PenOid = "1.3.6.1.4.1.32473.1.2".parse().unwrap();
//! assert!(oid.is_descendant_of("1.3.6.1.4.1.32473"));
//! assert_eq!(oid.parent().unwrap().to_string(), "1.3.6.1.4.1.32473.1");
//! assert_eq!(oid.next().unwrap().to_string(), "1.3.6.1.4.1.32473.1.3");
//! ```

// ============================================================================
// MODULES (dependency order: base → oid → generate → registry)
// ============================================================================

/// Foundation types: constants, OidError
pub mod base;

/// The PEN OID value type and single-value operations
pub mod oid;

/// Single-level and parallel bulk generation
pub mod generate;

/// PEN assignment records
pub mod registry;

// Re-export commonly needed items
pub use base::{OidError, Result};
pub use generate::{BulkError, BulkOptions, Generate, GenerateIter, UnitFailure};
pub use oid::{OidFormat, OidOperand, OidOrdering, PenOid, PenOidBuilder, is_oid, is_pen_oid};
pub use registry::PenAssignment;
