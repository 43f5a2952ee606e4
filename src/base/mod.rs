//! Foundation types for the PEN OID model.
//!
//! This module provides the pieces every other module builds on:
//! - [`OidError`] - The crate-wide error type
//! - Constants of the IANA enterprise arc (`1.3.6.1.4.1`)
//!
//! This module has NO dependencies on other pen-oid modules.

pub mod constants;
mod error;

pub use error::{OidError, Result};
