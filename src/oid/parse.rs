//! Parsing and validation of dotted OID text.

use super::lexer::is_valid_oid;
use super::value::PenOid;
use crate::base::constants::{OID_SEPARATOR, PEN_COMPONENT_COUNT, PEN_PREFIX, PEN_PREFIX_ARCS};
use crate::base::{OidError, Result};
use smol_str::SmolStr;
use std::str::FromStr;

/// Check whether `text` is a valid OID of any arc.
pub fn is_oid(text: &str) -> bool {
    is_valid_oid(text)
}

/// Check whether `text` is a valid OID under `1.3.6.1.4.1.`.
pub fn is_pen_oid(text: &str) -> bool {
    text.starts_with(PEN_PREFIX) && is_valid_oid(text)
}

impl PenOid {
    /// Parse a full PEN OID such as `1.3.6.1.4.1.32473.1.2`.
    ///
    /// Surrounding whitespace is ignored. Failures are reported in this
    /// order: missing prefix, bad PEN arc, bad suffix segment, and finally
    /// any remaining grammar violation such as a leading zero.
    pub fn parse(text: &str) -> Result<Self> {
        let oid = text.trim();

        let Some(rest) = oid.strip_prefix(PEN_PREFIX) else {
            return Err(OidError::malformed(oid));
        };

        let (pen_text, suffix) = match rest.split_once(OID_SEPARATOR) {
            Some((pen_text, suffix)) => (pen_text, Some(suffix)),
            None => (rest, None),
        };

        let pen: u32 = pen_text
            .parse()
            .map_err(|_| OidError::invalid_pen(pen_text, oid))?;

        let mut components = Vec::with_capacity(PEN_COMPONENT_COUNT + 4);
        components.extend_from_slice(&PEN_PREFIX_ARCS);
        components.push(pen);

        if let Some(suffix) = suffix {
            for segment in suffix.split(OID_SEPARATOR) {
                let component = segment
                    .parse()
                    .map_err(|_| OidError::invalid_component(segment, oid))?;
                components.push(component);
            }
        }

        if !is_valid_oid(oid) {
            return Err(OidError::malformed(oid));
        }

        Ok(Self::from_validated(components, None))
    }

    /// Parse a full PEN OID and attach a label.
    pub fn parse_named(text: &str, name: impl Into<SmolStr>) -> Result<Self> {
        Ok(Self::parse(text)?.with_name(name))
    }
}

impl FromStr for PenOid {
    type Err = OidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PenOid {
    type Error = OidError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pen_root() {
        let oid = PenOid::parse("1.3.6.1.4.1.32473").unwrap();
        assert_eq!(oid.pen(), Some(32473));
        assert_eq!(oid.components(), &[1, 3, 6, 1, 4, 1, 32473]);
    }

    #[test]
    fn test_parse_with_suffix() {
        let oid = PenOid::parse("1.3.6.1.4.1.32473.0.4294967295").unwrap();
        assert_eq!(oid.suffix(), &[0, u32::MAX]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let oid: PenOid = "  1.3.6.1.4.1.5.1\n".parse().unwrap();
        assert_eq!(oid.components(), &[1, 3, 6, 1, 4, 1, 5, 1]);
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert_eq!(
            PenOid::parse("2.3.6.1.4.1.1"),
            Err(OidError::malformed("2.3.6.1.4.1.1"))
        );
        // prefix without a PEN arc
        assert!(matches!(
            PenOid::parse("1.3.6.1.4.1"),
            Err(OidError::MalformedOid(_))
        ));
        assert!(matches!(PenOid::parse(""), Err(OidError::MalformedOid(_))));
    }

    #[test]
    fn test_parse_invalid_pen() {
        assert_eq!(
            PenOid::parse("1.3.6.1.4.1.abc"),
            Err(OidError::invalid_pen("abc", "1.3.6.1.4.1.abc"))
        );
        assert!(matches!(
            PenOid::parse("1.3.6.1.4.1.4294967296"),
            Err(OidError::InvalidPen { .. })
        ));
        assert!(matches!(
            PenOid::parse("1.3.6.1.4.1."),
            Err(OidError::InvalidPen { segment, .. }) if segment.is_empty()
        ));
    }

    #[test]
    fn test_parse_invalid_component_names_segment() {
        assert_eq!(
            PenOid::parse("1.3.6.1.4.1.5.1.x.3"),
            Err(OidError::invalid_component("x", "1.3.6.1.4.1.5.1.x.3"))
        );
        assert!(matches!(
            PenOid::parse("1.3.6.1.4.1.5.99999999999"),
            Err(OidError::InvalidComponent { segment, .. }) if segment == "99999999999"
        ));
    }

    #[test]
    fn test_parse_rejects_leading_zero() {
        assert!(matches!(
            PenOid::parse("1.3.6.1.4.1.5.01"),
            Err(OidError::MalformedOid(_))
        ));
        assert!(matches!(
            PenOid::parse("1.3.6.1.4.1.+5"),
            Err(OidError::MalformedOid(_))
        ));
    }

    #[test]
    fn test_is_pen_oid() {
        assert!(is_pen_oid("1.3.6.1.4.1.0"));
        assert!(is_pen_oid("1.3.6.1.4.1.32473.1"));
        assert!(!is_pen_oid("1.3.6.1.4.1"));
        assert!(!is_pen_oid("1.3.6.1.2.1.1"));
        assert!(!is_pen_oid("1.3.6.1.4.1.05"));
    }

    #[test]
    fn test_is_oid() {
        assert!(is_oid("1.3.6.1.2.1"));
        assert!(is_oid("2.25.0"));
        assert!(!is_oid("3.1"));
        assert!(!is_oid("1.3.6.1.4.1.abc"));
    }
}
