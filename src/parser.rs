use crate::error::{Result, SyntaxError};
use crate::types::{PatternValue, SegmentSequence};

/// Opening delimiter of an alternation token
pub const ALTERNATION_OPEN: char = '[';
/// Closing delimiter of an alternation token
pub const ALTERNATION_CLOSE: char = ']';
/// Delimiter between alternatives
pub const ALTERNATION_DELIMITER: char = '|';

/// Split a value into its raw segments.
///
/// Text is split on `separator` with empty runs kept as empty segments.
/// Pre-segmented values are returned unchanged.
pub fn normalize(value: &PatternValue, separator: &str) -> SegmentSequence {
    match value {
        PatternValue::Text(text) => text.split(separator).map(String::from).collect(),
        PatternValue::Segments(segments) => segments.clone(),
    }
}

/// Parse an alternation token such as `[name|alternate]`.
///
/// Alternatives are returned in order, duplicates kept, no trimming.
/// An empty part between two non-empty parts is skipped
/// (`[a||b]` yields `a` and `b`); an empty first or last part is an error.
///
/// # Errors
/// - [`SyntaxError::UnterminatedAlternation`] if the token is not wrapped in `[` and `]`
/// - [`SyntaxError::NoAlternatives`] for `[]`
/// - [`SyntaxError::EmptyAlternative`] for `[|]`, `[name|]`, `[|name]`
pub fn extract_alternatives(token: &str) -> Result<Vec<String>> {
    let interior = token
        .strip_prefix(ALTERNATION_OPEN)
        .and_then(|rest| rest.strip_suffix(ALTERNATION_CLOSE))
        .ok_or_else(|| {
            tracing::debug!(token, "alternation is not bracketed");
            SyntaxError::UnterminatedAlternation {
                token: token.to_string(),
            }
        })?;

    if interior.is_empty() {
        tracing::debug!(token, "alternation has no alternatives");
        return Err(SyntaxError::NoAlternatives {
            token: token.to_string(),
        });
    }

    let parts: Vec<&str> = interior.split(ALTERNATION_DELIMITER).collect();

    // Both ends must carry text; inner gaps from doubled delimiters are skipped
    let first_empty = parts.first().is_some_and(|p| p.is_empty());
    let last_empty = parts.last().is_some_and(|p| p.is_empty());
    if first_empty || last_empty {
        tracing::debug!(token, "alternation has an empty alternative");
        return Err(SyntaxError::EmptyAlternative {
            token: token.to_string(),
        });
    }

    Ok(parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect())
}

/// Check if a raw token is shaped like an alternation (`[` ... `]`)
pub fn is_alternation(raw: &str) -> bool {
    raw.len() >= 2 && raw.starts_with(ALTERNATION_OPEN) && raw.ends_with(ALTERNATION_CLOSE)
}
