//! Error types for OID operations.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T, E = OidError> = std::result::Result<T, E>;

/// Errors that can occur while building, parsing or navigating PEN OIDs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OidError {
    /// Text does not follow the OID grammar or lacks the PEN prefix.
    #[error("Malformed OID: {0}")]
    MalformedOid(String),

    /// The PEN arc is not an unsigned 32-bit number.
    #[error("Invalid Private Enterprise Number (PEN) '{segment}' in OID {oid}")]
    InvalidPen { segment: String, oid: String },

    /// A component after the PEN is not an unsigned 32-bit number.
    #[error("Invalid OID component '{segment}' in OID {oid}")]
    InvalidComponent { segment: String, oid: String },

    /// The operation needs at least seven components and a PEN.
    #[error("OID is not initialized")]
    UninitializedOid,

    /// Carry or borrow would have to cross the fixed PEN prefix.
    #[error("Cannot {operation} OID {oid}: range exhausted")]
    RangeExhausted { operation: &'static str, oid: String },

    /// A generation range ends before it starts.
    #[error("Invalid {dimension} range: end {end} is less than start {start}")]
    InvalidRange {
        dimension: &'static str,
        start: u32,
        end: u32,
    },

    /// A component position is outside the editable suffix.
    #[error("Invalid component position {position} (suffix has {len} components)")]
    InvalidPosition { position: usize, len: usize },

    /// Unknown format string.
    #[error("Invalid format string: {0}")]
    InvalidFormat(String),

    /// The worker pool for bulk generation could not be created.
    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

impl OidError {
    /// Create a malformed OID error.
    pub fn malformed(oid: impl Into<String>) -> Self {
        Self::MalformedOid(oid.into())
    }

    /// Create an invalid PEN error.
    pub fn invalid_pen(segment: impl Into<String>, oid: impl Into<String>) -> Self {
        Self::InvalidPen {
            segment: segment.into(),
            oid: oid.into(),
        }
    }

    /// Create an invalid component error.
    pub fn invalid_component(segment: impl Into<String>, oid: impl Into<String>) -> Self {
        Self::InvalidComponent {
            segment: segment.into(),
            oid: oid.into(),
        }
    }

    /// Create a range exhausted error for an increment.
    pub fn increment_exhausted(oid: impl Into<String>) -> Self {
        Self::RangeExhausted {
            operation: "increment",
            oid: oid.into(),
        }
    }

    /// Create a range exhausted error for a decrement.
    pub fn decrement_exhausted(oid: impl Into<String>) -> Self {
        Self::RangeExhausted {
            operation: "decrement",
            oid: oid.into(),
        }
    }

    /// Check a generation range, failing when `end < start`.
    pub fn check_range(dimension: &'static str, start: u32, end: u32) -> Result<()> {
        if end < start {
            return Err(Self::InvalidRange {
                dimension,
                start,
                end,
            });
        }
        Ok(())
    }
}
