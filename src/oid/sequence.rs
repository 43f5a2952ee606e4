//! Next/previous navigation with carry and borrow.
//!
//! Stepping changes the deepest component. When that component wraps around
//! the `u32` range, the step ripples into the component to its left, but
//! only while that component lies after the PEN. The `1.3.6.1.4.1.<pen>`
//! prefix is a hard floor: a ripple that would reach it is
//! [`OidError::RangeExhausted`].
//!
//! ```text
//! 1.3.6.1.4.1.5.1.4294967295  --next-->  1.3.6.1.4.1.5.2.0
//! 1.3.6.1.4.1.5.4294967295    --next-->  RangeExhausted
//! 1.3.6.1.4.1.5               --next-->  1.3.6.1.4.1.6
//! ```

use super::value::PenOid;
use crate::base::constants::PEN_COMPONENT_COUNT;
use crate::base::{OidError, Result};
use smol_str::SmolStr;
use tracing::trace;

/// Direction of a sequence step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Increment,
    Decrement,
}

impl Step {
    /// Apply to one component, reporting whether it wrapped.
    fn apply(self, component: u32) -> (u32, bool) {
        match self {
            Self::Increment => component.overflowing_add(1),
            Self::Decrement => component.overflowing_sub(1),
        }
    }

    fn exhausted(self, oid: &PenOid) -> OidError {
        match self {
            Self::Increment => OidError::increment_exhausted(oid.to_dotted()),
            Self::Decrement => OidError::decrement_exhausted(oid.to_dotted()),
        }
    }
}

impl PenOid {
    /// The following OID at the same depth.
    pub fn next(&self) -> Result<Self> {
        self.step(Step::Increment, None)
    }

    /// The following OID at the same depth, labelled `name`.
    pub fn next_named(&self, name: impl Into<SmolStr>) -> Result<Self> {
        self.step(Step::Increment, Some(name.into()))
    }

    /// The preceding OID at the same depth.
    pub fn previous(&self) -> Result<Self> {
        self.step(Step::Decrement, None)
    }

    /// The preceding OID at the same depth, labelled `name`.
    pub fn previous_named(&self, name: impl Into<SmolStr>) -> Result<Self> {
        self.step(Step::Decrement, Some(name.into()))
    }

    fn step(&self, step: Step, name: Option<SmolStr>) -> Result<Self> {
        if !self.is_initialized() {
            return Err(OidError::UninitializedOid);
        }

        let mut components = self.components().to_vec();
        let mut index = components.len() - 1;

        loop {
            let (value, wrapped) = step.apply(components[index]);
            components[index] = value;
            if !wrapped {
                break;
            }
            // the component to the left must still be after the PEN
            if index <= PEN_COMPONENT_COUNT {
                return Err(step.exhausted(self));
            }
            trace!(?step, index, "carry into component {}", index - 1);
            index -= 1;
        }

        if components == self.components() {
            return Err(step.exhausted(self));
        }

        Ok(Self::from_validated(components, name))
    }
}
