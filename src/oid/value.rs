//! The PEN OID value type.

use crate::base::constants::{PEN_COMPONENT_COUNT, PEN_INDEX, PEN_PREFIX_ARCS};
use crate::base::{OidError, Result};
use smol_str::SmolStr;

/// An object identifier under the IANA enterprise arc `1.3.6.1.4.1.<pen>`.
///
/// Values are immutable: navigation returns new values, and component
/// editing goes through [`PenOidBuilder`](super::PenOidBuilder).
///
/// The optional name is a label only. It never takes part in comparison,
/// equality or hashing.
#[derive(Debug, Clone)]
pub struct PenOid {
    pen: Option<u32>,
    components: Vec<u32>,
    name: Option<SmolStr>,
}

impl Default for PenOid {
    fn default() -> Self {
        Self::empty()
    }
}

impl PenOid {
    /// Create an uninitialized OID holding only the `1.3.6.1.4.1` prefix.
    pub fn empty() -> Self {
        Self {
            pen: None,
            components: PEN_PREFIX_ARCS.to_vec(),
            name: None,
        }
    }

    /// Create the root OID of a Private Enterprise Number.
    pub fn new(pen: u32) -> Self {
        let mut components = Vec::with_capacity(PEN_COMPONENT_COUNT);
        components.extend_from_slice(&PEN_PREFIX_ARCS);
        components.push(pen);
        Self {
            pen: Some(pen),
            components,
            name: None,
        }
    }

    /// Create the root OID of a Private Enterprise Number with a label.
    pub fn named(pen: u32, name: impl Into<SmolStr>) -> Self {
        Self::new(pen).with_name(name)
    }

    /// Create an OID from its full component sequence.
    ///
    /// The sequence must start with `1.3.6.1.4.1` and contain the PEN.
    pub fn from_components(components: &[u32]) -> Result<Self> {
        if !has_pen_prefix(components) {
            return Err(OidError::malformed(join_components(components)));
        }
        Ok(Self::from_validated(components.to_vec(), None))
    }

    /// Build a value from components already known to carry the PEN prefix.
    pub(crate) fn from_validated(components: Vec<u32>, name: Option<SmolStr>) -> Self {
        debug_assert!(has_pen_prefix(&components));
        Self {
            pen: Some(components[PEN_INDEX]),
            components,
            name,
        }
    }

    /// Replace the label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Drop the label.
    #[must_use]
    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    /// The Private Enterprise Number, if set.
    pub fn pen(&self) -> Option<u32> {
        self.pen
    }

    /// The full component sequence, prefix included.
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Components after the PEN (the organization's own subtree coordinates).
    pub fn suffix(&self) -> &[u32] {
        self.components.get(PEN_COMPONENT_COUNT..).unwrap_or(&[])
    }

    /// Number of components, prefix included.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// The label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn label(&self) -> Option<&SmolStr> {
        self.name.as_ref()
    }

    /// True once the value holds at least `1.3.6.1.4.1.<pen>`.
    pub fn is_initialized(&self) -> bool {
        self.components.len() >= PEN_COMPONENT_COUNT && self.pen.is_some()
    }

    /// The component sequence, or `None` for an uninitialized value.
    pub fn to_components(&self) -> Option<Vec<u32>> {
        self.is_initialized().then(|| self.components.clone())
    }
}

impl TryFrom<&[u32]> for PenOid {
    type Error = OidError;

    fn try_from(components: &[u32]) -> Result<Self> {
        Self::from_components(components)
    }
}

impl TryFrom<Vec<u32>> for PenOid {
    type Error = OidError;

    fn try_from(components: Vec<u32>) -> Result<Self> {
        if !has_pen_prefix(&components) {
            return Err(OidError::malformed(join_components(&components)));
        }
        Ok(Self::from_validated(components, None))
    }
}

impl From<u32> for PenOid {
    fn from(pen: u32) -> Self {
        Self::new(pen)
    }
}

/// Whether `components` is `1.3.6.1.4.1.<pen>` followed by anything.
pub(crate) fn has_pen_prefix(components: &[u32]) -> bool {
    components.len() >= PEN_COMPONENT_COUNT && components.starts_with(&PEN_PREFIX_ARCS)
}

/// Dotted rendering of an arbitrary component slice.
pub(crate) fn join_components(components: &[u32]) -> String {
    use std::fmt::Write;

    // ~3 digits per arc plus the separator
    let mut out = String::with_capacity(components.len() * 4);
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        // write! to String is infallible
        let _ = write!(out, "{component}");
    }
    out
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::PenOid;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    impl Serialize for PenOid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_dotted())
        }
    }

    impl<'de> Deserialize<'de> for PenOid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            if text.is_empty() {
                return Ok(PenOid::empty());
            }
            PenOid::parse(&text).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_prefix_only() {
        let oid = PenOid::empty();
        assert_eq!(oid.components(), &[1, 3, 6, 1, 4, 1]);
        assert_eq!(oid.pen(), None);
        assert!(!oid.is_initialized());
        assert!(oid.suffix().is_empty());
        assert_eq!(oid.to_components(), None);
    }

    #[test]
    fn test_new_sets_pen_as_seventh_component() {
        let oid = PenOid::new(32473);
        assert_eq!(oid.components(), &[1, 3, 6, 1, 4, 1, 32473]);
        assert_eq!(oid.pen(), Some(32473));
        assert_eq!(oid.depth(), 7);
        assert!(oid.is_initialized());
    }

    #[test]
    fn test_from_components_requires_prefix_and_pen() {
        let oid = PenOid::from_components(&[1, 3, 6, 1, 4, 1, 9, 2, 3]).unwrap();
        assert_eq!(oid.pen(), Some(9));
        assert_eq!(oid.suffix(), &[2, 3]);

        assert!(matches!(
            PenOid::from_components(&[1, 3, 6, 1, 4, 1]),
            Err(OidError::MalformedOid(_))
        ));
        assert!(matches!(
            PenOid::from_components(&[1, 3, 6, 1, 2, 1, 9]),
            Err(OidError::MalformedOid(text)) if text == "1.3.6.1.2.1.9"
        ));
    }

    #[test]
    fn test_name_is_a_label() {
        let oid = PenOid::named(32473, "Example");
        assert_eq!(oid.name(), Some("Example"));
        assert_eq!(oid.clone().without_name().name(), None);
        assert_eq!(oid.with_name("Other").name(), Some("Other"));
    }

    #[test]
    fn test_join_components() {
        assert_eq!(join_components(&[]), "");
        assert_eq!(join_components(&[1]), "1");
        assert_eq!(join_components(&[1, 3, 6]), "1.3.6");
    }
}
