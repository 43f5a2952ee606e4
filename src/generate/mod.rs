//! Enumeration of OID subtrees.
//!
//! Two shapes are supported:
//!
//! ```text
//! generate(x, 0, 2)                   x, x.0, x.1, x.2
//! generate_bulk(x, 0..2, 0..=1)       x.0, x.0.0, x.0.1, x.1, x.1.0, x.1.1
//! ```
//!
//! The single-level form is a lazy sequence. The bulk form fans the parent
//! range out over a rayon pool and sorts the accumulated values once at the
//! end, so the output never depends on scheduling.

mod bulk;
mod options;


pub use bulk::{BulkError, UnitFailure};
pub use options::BulkOptions;

use crate::base::{OidError, Result};
use crate::oid::PenOid;
use std::iter::FusedIterator;

/// A lazy, restartable enumeration of `base` followed by
/// `base.start ..= base.end`.
///
/// Iterating borrows the generator, so the same sequence can be walked any
/// number of times.
#[derive(Debug, Clone)]
pub struct Generate {
    base: PenOid,
    start: u32,
    end: u32,
}

impl Generate {
    pub(crate) fn new(base: PenOid, start: u32, end: u32) -> Result<Self> {
        if !base.is_initialized() {
            return Err(OidError::UninitializedOid);
        }
        OidError::check_range("child", start, end)?;
        Ok(Self { base, start, end })
    }

    /// The OID every generated value extends.
    pub fn base(&self) -> &PenOid {
        &self.base
    }

    /// Number of values produced, `base` included.
    pub fn len(&self) -> usize {
        usize::try_from(u64::from(self.end - self.start) + 2).unwrap_or(usize::MAX)
    }

    /// Never empty: `base` is always produced.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Walk the sequence from the beginning.
    pub fn iter(&self) -> GenerateIter<'_> {
        GenerateIter {
            base: &self.base,
            yield_base: true,
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl<'a> IntoIterator for &'a Generate {
    type Item = PenOid;
    type IntoIter = GenerateIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Generate`] sequence.
#[derive(Debug, Clone)]
pub struct GenerateIter<'a> {
    base: &'a PenOid,
    yield_base: bool,
    next: Option<u32>,
    end: u32,
}

impl Iterator for GenerateIter<'_> {
    type Item = PenOid;

    fn next(&mut self) -> Option<PenOid> {
        if self.yield_base {
            self.yield_base = false;
            return Some(self.base.clone());
        }
        let arc = self.next?;
        self.next = (arc < self.end).then(|| arc + 1);
        Some(self.base.child_unchecked(arc))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |arc| u64::from(self.end - arc) + 1)
            + u64::from(self.yield_base);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GenerateIter<'_> {}

impl FusedIterator for GenerateIter<'_> {}

impl PenOid {
    /// This OID followed by one child per arc in `start..=end`.
    ///
    /// Fails with [`OidError::InvalidRange`] when `end < start`.
    pub fn generate(&self, start: u32, end: u32) -> Result<Generate> {
        Generate::new(self.clone(), start, end)
    }
}
