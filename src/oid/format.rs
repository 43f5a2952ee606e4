//! Text rendering of PEN OIDs.

use super::value::{PenOid, join_components};
use crate::base::OidError;
use crate::base::constants::NAME_SEPARATOR;
use std::fmt;
use std::str::FromStr;

/// Rendering mode for [`PenOid::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OidFormat {
    /// Dotted components, e.g. `1.3.6.1.4.1.32473`
    #[default]
    Canonical,
    /// Dotted components plus ` - <name>` when labelled
    Display,
    /// The label alone, or empty
    NameOnly,
    /// The decimal PEN, or empty
    PenOnly,
}

impl FromStr for OidFormat {
    type Err = OidError;

    /// Single-letter format strings: `O`, `D`, `G`, `N`, `P`.
    ///
    /// An empty string means the general format, which is the display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "O" | "o" => Ok(Self::Canonical),
            "" | "G" | "D" | "d" => Ok(Self::Display),
            "N" => Ok(Self::NameOnly),
            "P" => Ok(Self::PenOnly),
            _ => Err(OidError::InvalidFormat(s.to_string())),
        }
    }
}

impl PenOid {
    /// Render in the given mode. Uninitialized values render as empty text.
    pub fn format(&self, mode: OidFormat) -> String {
        match mode {
            OidFormat::Canonical => self.to_dotted(),
            OidFormat::Display => match self.name() {
                Some(name) if !name.is_empty() => {
                    format!("{}{NAME_SEPARATOR}{name}", self.to_dotted())
                }
                _ => self.to_dotted(),
            },
            OidFormat::NameOnly => self.name().unwrap_or_default().to_string(),
            OidFormat::PenOnly => self.pen().map(|pen| pen.to_string()).unwrap_or_default(),
        }
    }

    /// Canonical dotted form, or an empty string when uninitialized.
    pub fn to_dotted(&self) -> String {
        if !self.is_initialized() {
            return String::new();
        }
        join_components(self.components())
    }
}

/// `{}` renders the canonical form, `{:#}` the display form.
impl fmt::Display for PenOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if f.alternate() {
            OidFormat::Display
        } else {
            OidFormat::Canonical
        };
        f.write_str(&self.format(mode))
    }
}
