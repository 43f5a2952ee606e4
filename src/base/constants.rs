//! Constants of the IANA Private Enterprise Number arc.

/// `iso.org.dod.internet.private.enterprise`, the arc every PEN lives under.
pub const PEN_PREFIX_ARCS: [u32; 6] = [1, 3, 6, 1, 4, 1];

/// Dotted form of [`PEN_PREFIX_ARCS`], including the trailing separator.
pub const PEN_PREFIX: &str = "1.3.6.1.4.1.";

/// Number of components in a bare PEN OID (`1.3.6.1.4.1.<pen>`).
pub const PEN_COMPONENT_COUNT: usize = 7;

/// Index of the PEN inside the component sequence.
pub const PEN_INDEX: usize = PEN_COMPONENT_COUNT - 1;

/// Separator between OID arcs.
pub const OID_SEPARATOR: char = '.';

/// Separator between the dotted OID and its label in the display format.
pub const NAME_SEPARATOR: &str = " - ";

/// Placeholder the IANA registry uses for an empty field.
pub const REGISTRY_NONE: &str = "---none---";

/// Placeholder the IANA registry uses for a missing contact.
pub const REGISTRY_NO_CONTACT: &str = "----- no contact";
