use std::fmt;

use crate::error::Result;
use crate::parser::{extract_alternatives, is_alternation};

/// Raw token for a wildcard standing in for one or more segments
pub const WILDCARD_ANY: &str = "*";
/// Raw token for a wildcard standing in for exactly one segment
pub const WILDCARD_ONE: &str = "?";

/// Classified form of one segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Exact text, matched byte for byte
    Literal(String),
    /// `?`: exactly one segment, any content
    WildcardOne,
    /// `*`: one or more segments, any content
    WildcardAny,
    /// `[a|b|...]`: any of the listed alternatives
    Alternation(Vec<String>),
}

impl Segment {
    /// Classify a raw token.
    ///
    /// Tokens bracketed with `[` and `]` are parsed as alternations and
    /// propagate their syntax errors.
    pub fn classify(raw: &str) -> Result<Self> {
        match raw {
            WILDCARD_ANY => Ok(Segment::WildcardAny),
            WILDCARD_ONE => Ok(Segment::WildcardOne),
            _ if is_alternation(raw) => Ok(Segment::Alternation(extract_alternatives(raw)?)),
            _ => Ok(Segment::Literal(raw.to_string())),
        }
    }

    /// Check if this is `*` or `?`
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::WildcardAny | Segment::WildcardOne)
    }

    /// Check if this is `*`
    pub fn is_wildcard_any(&self) -> bool {
        matches!(self, Segment::WildcardAny)
    }

    /// Order-independent compatibility of two segments at the same position
    pub fn is_compatible(&self, other: &Segment) -> bool {
        match (self, other) {
            (Segment::WildcardAny, _) | (_, Segment::WildcardAny) => true,
            (Segment::WildcardOne, _) | (_, Segment::WildcardOne) => true,
            // A `*` or `?` alternative accepts whatever sits on the other side
            (Segment::Alternation(alts), _) | (_, Segment::Alternation(alts))
                if has_wildcard_member(alts) =>
            {
                true
            }
            (Segment::Alternation(alts), Segment::Literal(text))
            | (Segment::Literal(text), Segment::Alternation(alts)) => alts.contains(text),
            (Segment::Alternation(a), Segment::Alternation(b)) => {
                a.iter().any(|alt| b.contains(alt))
            }
            (Segment::Literal(a), Segment::Literal(b)) => a == b,
        }
    }
}

fn has_wildcard_member(alts: &[String]) -> bool {
    alts.iter().any(|a| a == WILDCARD_ANY || a == WILDCARD_ONE)
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::WildcardOne => f.write_str(WILDCARD_ONE),
            Segment::WildcardAny => f.write_str(WILDCARD_ANY),
            Segment::Alternation(alts) => write!(f, "[{}]", alts.join("|")),
        }
    }
}
