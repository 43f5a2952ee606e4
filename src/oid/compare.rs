//! Ordering, equality and hashing of PEN OIDs.
//!
//! Components are compared numerically, left to right. A sequence that runs
//! out first is padded with a below-zero sentinel, so a parent always sorts
//! before its children:
//!
//! ```text
//! 1.3.6.1.4.1.5      < 1.3.6.1.4.1.5.0
//! 1.3.6.1.4.1.5.9    < 1.3.6.1.4.1.5.10
//! 1.3.6.1.4.1.5.9.9  < 1.3.6.1.4.1.6
//! ```
//!
//! The other operand may be a value, dotted text or a raw component array
//! (see [`OidOperand`]). Text that does not parse and arrays without the PEN
//! prefix are [`OidOrdering::Incomparable`] rather than errors.

use super::value::{PenOid, has_pen_prefix};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Padding for the shorter side of a comparison.
const SENTINEL: i64 = -1;

/// Mixed into every hash so PEN OIDs do not collide with bare integers.
const HASH_DISCRIMINANT: u32 = 0x5045_4e4f;

/// Seed of the XOR fold over components.
const HASH_FOLD_SEED: u32 = 2_142_136_263;

/// Result of comparing a PEN OID with another operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OidOrdering {
    Less,
    Equal,
    Greater,
    /// The other operand could not be read as a PEN OID.
    Incomparable,
}

impl OidOrdering {
    /// Convert to a standard ordering, `None` when incomparable.
    pub fn as_ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Incomparable => None,
        }
    }

    pub fn is_eq(self) -> bool {
        self == Self::Equal
    }
}

impl From<Ordering> for OidOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// The right-hand side of a comparison.
#[derive(Debug, Clone, Copy)]
pub enum OidOperand<'a> {
    Oid(&'a PenOid),
    /// Dotted text, parsed before comparing
    Text(&'a str),
    /// Full component sequence including `1.3.6.1.4.1`
    Components(&'a [u32]),
}

/// An operand reduced to its components.
pub(crate) struct Resolved<'a> {
    pub components: Cow<'a, [u32]>,
    pub initialized: bool,
}

impl<'a> OidOperand<'a> {
    /// Reduce to components, `None` when the operand is not a PEN OID.
    pub(crate) fn resolve(self) -> Option<Resolved<'a>> {
        match self {
            Self::Oid(oid) => Some(Resolved {
                components: Cow::Borrowed(oid.components()),
                initialized: oid.is_initialized(),
            }),
            Self::Text(text) => PenOid::parse(text).ok().map(|oid| Resolved {
                initialized: oid.is_initialized(),
                components: Cow::Owned(oid.components().to_vec()),
            }),
            Self::Components(components) => has_pen_prefix(components).then_some(Resolved {
                components: Cow::Borrowed(components),
                initialized: true,
            }),
        }
    }
}

impl<'a> From<&'a PenOid> for OidOperand<'a> {
    fn from(oid: &'a PenOid) -> Self {
        Self::Oid(oid)
    }
}

impl<'a> From<&'a str> for OidOperand<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for OidOperand<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [u32]> for OidOperand<'a> {
    fn from(components: &'a [u32]) -> Self {
        Self::Components(components)
    }
}

impl<'a> From<&'a Vec<u32>> for OidOperand<'a> {
    fn from(components: &'a Vec<u32>) -> Self {
        Self::Components(components)
    }
}

impl<'a, const N: usize> From<&'a [u32; N]> for OidOperand<'a> {
    fn from(components: &'a [u32; N]) -> Self {
        Self::Components(components)
    }
}

/// Compare two component sequences, padding the shorter with [`SENTINEL`].
pub(crate) fn compare_components(left: &[u32], right: &[u32]) -> Ordering {
    let widen =
        |components: &[u32], i: usize| components.get(i).map_or(SENTINEL, |&c| i64::from(c));

    (0..left.len().max(right.len()))
        .map(|i| widen(left, i).cmp(&widen(right, i)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl PenOid {
    /// Compare with a value, dotted text or component array.
    ///
    /// Uninitialized values compare by their bare prefix; use
    /// [`equals`](Self::equals) for identity.
    pub fn compare<'a>(&self, other: impl Into<OidOperand<'a>>) -> OidOrdering {
        match other.into().resolve() {
            Some(resolved) => compare_components(self.components(), &resolved.components).into(),
            None => OidOrdering::Incomparable,
        }
    }

    /// True when both sides are initialized and compare equal.
    ///
    /// An uninitialized value is never equal to anything, itself included.
    pub fn equals<'a>(&self, other: impl Into<OidOperand<'a>>) -> bool {
        if !self.is_initialized() {
            return false;
        }
        other.into().resolve().is_some_and(|resolved| {
            resolved.initialized
                && compare_components(self.components(), &resolved.components).is_eq()
        })
    }

    /// Total ordering over components, used to sort generated sequences.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        compare_components(self.components(), other.components())
    }
}

/// Uninitialized values are not equal to themselves; they must not be used
/// as map keys.
impl PartialEq for PenOid {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for PenOid {}

impl PartialEq<str> for PenOid {
    fn eq(&self, other: &str) -> bool {
        self.equals(other)
    }
}

impl PartialEq<&str> for PenOid {
    fn eq(&self, other: &&str) -> bool {
        self.equals(*other)
    }
}

impl PartialEq<[u32]> for PenOid {
    fn eq(&self, other: &[u32]) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for PenOid {
    /// `None` when either side is uninitialized, keeping `partial_cmp`
    /// consistent with `==`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_initialized() || !other.is_initialized() {
            return None;
        }
        Some(self.total_cmp(other))
    }
}

impl PartialOrd<str> for PenOid {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        if !self.is_initialized() {
            return None;
        }
        self.compare(other).as_ordering()
    }
}

impl Hash for PenOid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_DISCRIMINANT.hash(state);
        if !self.is_initialized() {
            return;
        }
        let folded = self
            .components()
            .iter()
            .fold(HASH_FOLD_SEED, |acc, component| acc ^ component);
        folded.hash(state);
        self.pen().hash(state);
    }
}
