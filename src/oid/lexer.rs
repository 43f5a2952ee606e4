//! Logos-based lexer for dotted OID text
//!
//! Splits OID text into arcs and separators and checks the generic OID
//! grammar: the first arc is `0`, `1` or `2`, every following arc is either
//! `0` or a decimal number without leading zeros.

use logos::Logos;

/// Logos token enum for dotted OID text
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OidToken {
    #[token(".")]
    Dot,

    #[token("0")]
    Zero,

    #[regex(r"[1-9][0-9]*")]
    Number,
}

/// What the validator expects to see next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    FirstArc,
    Arc,
    DotOrEnd,
}

/// Check whether `text` is a syntactically valid OID.
///
/// Arc values are not range checked here; `1.99999999999` is grammatical.
pub(crate) fn is_valid_oid(text: &str) -> bool {
    let mut lexer = OidToken::lexer(text);
    let mut expect = Expect::FirstArc;

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return false;
        };

        expect = match (expect, token) {
            (Expect::FirstArc, OidToken::Zero) => Expect::DotOrEnd,
            (Expect::FirstArc, OidToken::Number) if matches!(lexer.slice(), "1" | "2") => {
                Expect::DotOrEnd
            }
            (Expect::Arc, OidToken::Zero | OidToken::Number) => Expect::DotOrEnd,
            (Expect::DotOrEnd, OidToken::Dot) => Expect::Arc,
            _ => return false,
        };
    }

    expect == Expect::DotOrEnd
}
