//! Parent, child and descendant queries.

use super::compare::OidOperand;
use super::value::PenOid;
use crate::base::constants::PEN_COMPONENT_COUNT;
use smol_str::SmolStr;

impl PenOid {
    /// The OID one level up, or `None` at the PEN root.
    pub fn parent(&self) -> Option<Self> {
        self.parent_with(None)
    }

    /// The OID one level up, labelled `name`.
    pub fn parent_named(&self, name: impl Into<SmolStr>) -> Option<Self> {
        self.parent_with(Some(name.into()))
    }

    fn parent_with(&self, name: Option<SmolStr>) -> Option<Self> {
        let components = self.components();
        if !self.is_initialized() || components.len() <= PEN_COMPONENT_COUNT {
            return None;
        }
        Some(Self::from_validated(
            components[..components.len() - 1].to_vec(),
            name,
        ))
    }

    /// The OID one level down at `arc`, or `None` when uninitialized.
    pub fn child(&self, arc: u32) -> Option<Self> {
        self.is_initialized().then(|| self.child_unchecked(arc))
    }

    /// The OID one level down at `arc`, labelled `name`.
    pub fn child_named(&self, arc: u32, name: impl Into<SmolStr>) -> Option<Self> {
        self.child(arc).map(|child| child.with_name(name))
    }

    /// Append one arc to an initialized value.
    pub(crate) fn child_unchecked(&self, arc: u32) -> Self {
        let mut components = Vec::with_capacity(self.depth() + 1);
        components.extend_from_slice(self.components());
        components.push(arc);
        Self::from_validated(components, None)
    }

    /// The bare PEN OID this value lives under.
    pub fn root(&self) -> Option<Self> {
        self.is_initialized()
            .then(|| self.pen().map(Self::new))
            .flatten()
    }

    /// Parents from the closest up to the PEN root.
    pub fn ancestors(&self) -> impl Iterator<Item = PenOid> + '_ {
        std::iter::successors(self.parent(), PenOid::parent)
    }

    /// True when removing the last arc yields `other`.
    pub fn is_child_of<'a>(&self, other: impl Into<OidOperand<'a>>) -> bool {
        self.parent().is_some_and(|parent| parent.equals(other))
    }

    /// True when `other` is a strict, contiguous prefix of this OID.
    ///
    /// `1.3.6.1.4.1.5.1.2` descends from `1.3.6.1.4.1.5` and
    /// `1.3.6.1.4.1.5.1`, but not from itself, `1.3.6.1.4.1.5.2` or
    /// `1.3.6.1.4.1.51`.
    pub fn is_descendant_of<'a>(&self, other: impl Into<OidOperand<'a>>) -> bool {
        if !self.is_initialized() {
            return false;
        }
        let Some(ancestor) = other.into().resolve() else {
            return false;
        };
        ancestor.initialized
            && ancestor.components.len() < self.depth()
            && self.components().starts_with(&ancestor.components)
    }

    /// True when this OID is a strict prefix of `other`.
    pub fn is_ancestor_of(&self, other: &PenOid) -> bool {
        other.is_descendant_of(self)
    }
}
