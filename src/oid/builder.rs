//! In-place editing of PEN OID components.
//!
//! [`PenOid`] values are immutable. Code that needs to grow or reshape a
//! subtree coordinate edits a [`PenOidBuilder`] instead and calls
//! [`build`](PenOidBuilder::build) when done.
//!
//! Positions passed to [`insert`](PenOidBuilder::insert) and
//! [`remove`](PenOidBuilder::remove) index the suffix after the PEN, so
//! position 0 is the first component after `1.3.6.1.4.1.<pen>`.

use super::value::PenOid;
use crate::base::constants::{PEN_COMPONENT_COUNT, PEN_PREFIX_ARCS};
use crate::base::{OidError, Result};
use smol_str::SmolStr;
use tracing::trace;

/// Mutable staging area for a [`PenOid`].
#[derive(Debug, Clone)]
pub struct PenOidBuilder {
    pen: Option<u32>,
    components: Vec<u32>,
    name: Option<SmolStr>,
}

impl Default for PenOidBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PenOidBuilder {
    /// Start from the bare `1.3.6.1.4.1` prefix, with no PEN yet.
    pub fn new() -> Self {
        Self {
            pen: None,
            components: PEN_PREFIX_ARCS.to_vec(),
            name: None,
        }
    }

    /// Set the PEN. Only the first call has any effect.
    pub fn pen(&mut self, pen: u32) -> &mut Self {
        match self.pen {
            Some(existing) => {
                trace!(existing, ignored = pen, "PEN already set");
            }
            None => {
                self.pen = Some(pen);
                self.components.truncate(PEN_PREFIX_ARCS.len());
                self.components.push(pen);
            }
        }
        self
    }

    /// Set the label carried by the built value.
    pub fn name(&mut self, name: impl Into<SmolStr>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Clear the label.
    pub fn clear_name(&mut self) -> &mut Self {
        self.name = None;
        self
    }

    /// True once the PEN has been set.
    pub fn is_initialized(&self) -> bool {
        self.components.len() >= PEN_COMPONENT_COUNT && self.pen.is_some()
    }

    /// Components after the PEN.
    pub fn suffix(&self) -> &[u32] {
        self.components.get(PEN_COMPONENT_COUNT..).unwrap_or(&[])
    }

    /// Append a component after the current last one.
    pub fn append(&mut self, component: u32) -> Result<&mut Self> {
        self.ensure_initialized()?;
        self.components.push(component);
        Ok(self)
    }

    /// Insert a component at a suffix position.
    ///
    /// A position at or past the end appends.
    pub fn insert(&mut self, component: u32, position: usize) -> Result<&mut Self> {
        self.ensure_initialized()?;
        let index = PEN_COMPONENT_COUNT.saturating_add(position);
        if index >= self.components.len() {
            self.components.push(component);
        } else {
            self.components.insert(index, component);
        }
        Ok(self)
    }

    /// Remove and return the component at a suffix position.
    pub fn remove(&mut self, position: usize) -> Result<u32> {
        self.ensure_initialized()?;
        let len = self.suffix().len();
        if position >= len {
            return Err(OidError::InvalidPosition { position, len });
        }
        Ok(self.components.remove(PEN_COMPONENT_COUNT + position))
    }

    /// Produce the immutable value.
    pub fn build(&self) -> Result<PenOid> {
        self.ensure_initialized()?;
        Ok(PenOid::from_validated(
            self.components.clone(),
            self.name.clone(),
        ))
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(OidError::UninitializedOid)
        }
    }
}

impl From<&PenOid> for PenOidBuilder {
    fn from(oid: &PenOid) -> Self {
        Self {
            pen: oid.pen(),
            components: oid.components().to_vec(),
            name: oid.label().cloned(),
        }
    }
}

impl PenOid {
    /// Start editing a copy of this value.
    pub fn to_builder(&self) -> PenOidBuilder {
        PenOidBuilder::from(self)
    }
}
