//! The PEN OID value type and everything that operates on single values.
//!
//! - [`PenOid`] - Immutable value; parse, format, compare, navigate
//! - [`PenOidBuilder`] - In-place component editing
//! - [`OidFormat`] - Rendering modes
//! - [`OidOrdering`], [`OidOperand`] - Tagged comparison across
//!   values, dotted text and component arrays

mod builder;
mod compare;
mod format;
mod hierarchy;
mod lexer;
mod parse;
mod sequence;
mod value;

pub use builder::PenOidBuilder;
pub use compare::{OidOperand, OidOrdering};
pub use format::OidFormat;
pub use parse::{is_oid, is_pen_oid};
pub use value::PenOid;
