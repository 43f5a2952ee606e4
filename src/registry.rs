//! PEN assignment records.
//!
//! The IANA enterprise-numbers registry lists, for every PEN, the
//! registrant organization, an assignee and a contact address. Ingesters
//! (file, HTTP, database) live outside this crate; they hand their raw field
//! values to [`PenAssignment::new`], which normalizes the registry's
//! placeholder conventions.

use crate::base::constants::{REGISTRY_NO_CONTACT, REGISTRY_NONE};
use crate::oid::{PenOid, is_pen_oid};
use smol_str::SmolStr;

/// A Private Enterprise Number together with its registrant metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PenAssignment {
    oid: PenOid,
    assignee: Option<SmolStr>,
    contact: Option<SmolStr>,
}

impl PenAssignment {
    /// Create a record from raw registry fields.
    ///
    /// `name` is the registrant organization and becomes the label of the
    /// PEN OID.
    pub fn new(
        pen: u32,
        name: Option<&str>,
        assignee: Option<&str>,
        contact: Option<&str>,
    ) -> Self {
        let mut oid = PenOid::new(pen);
        if let Some(name) = name.and_then(normalize_field) {
            oid = oid.with_name(name);
        }
        Self {
            oid,
            assignee: assignee.and_then(normalize_field),
            contact: contact.and_then(normalize_contact),
        }
    }

    /// The PEN root OID, labelled with the registrant name.
    pub fn pen_oid(&self) -> &PenOid {
        &self.oid
    }

    pub fn pen(&self) -> u32 {
        // always initialized by construction
        self.oid.pen().unwrap_or_default()
    }

    /// Registrant organization.
    pub fn name(&self) -> Option<&str> {
        self.oid.name()
    }

    /// Person responsible for the assignment.
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Contact address, usually e-mail.
    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }
}

impl From<PenAssignment> for PenOid {
    fn from(assignment: PenAssignment) -> Self {
        assignment.oid
    }
}

/// Trim a registry field; empty text and the registry's placeholders become
/// `None`.
pub fn normalize_field(value: &str) -> Option<SmolStr> {
    let value = value.trim();
    if value.is_empty() || value == REGISTRY_NONE || value == REGISTRY_NO_CONTACT {
        return None;
    }
    Some(SmolStr::new(value))
}

/// Like [`normalize_field`], and undo the `&` for `@` substitution the
/// registry applies to e-mail addresses.
pub fn normalize_contact(value: &str) -> Option<SmolStr> {
    let value = normalize_field(value)?;
    if value.contains('&') && !value.contains('@') {
        return Some(SmolStr::new(value.replace('&', "@")));
    }
    Some(value)
}

/// Read a PEN from either a bare decimal number or a full PEN OID.
///
/// Returns `None` for anything else.
pub fn pen_oid_from_text(text: &str) -> Option<PenOid> {
    let text = text.trim();
    if is_pen_oid(text) {
        return PenOid::parse(text).ok();
    }
    text.parse::<u32>().ok().map(PenOid::new)
}
