//! Segment-count alignment.
//!
//! When two patterns have a different number of segments, a contiguous
//! run of the longer one is merged into a single compound segment so
//! both sides line up position by position. A merge needs a `*` anchor;
//! without one the patterns cannot match.

use std::borrow::Cow;

use crate::compile::{CompiledPattern, Token};
use crate::matcher::Segment;

/// Collapse `long` down to `short.len()` segments.
///
/// Returns `None` when neither side has a `*` to anchor the merge.
pub(crate) fn reconcile<'a>(
    short: &CompiledPattern,
    long: &'a CompiledPattern,
) -> Option<Vec<Cow<'a, Segment>>> {
    debug_assert!(short.len() < long.len());

    // Nothing to merge into
    if short.is_empty() {
        return None;
    }

    let run = long.len() - short.len() + 1;

    if let Some(anchor) = short.first_wildcard_any() {
        tracing::trace!(anchor, run, "merging under wildcard of shorter pattern");
        return Some(merge(long, anchor, run));
    }

    let k = long.first_wildcard_any()?;
    let start = fallback_start(long.tokens(), k, run);
    tracing::trace!(wildcard = k, start, run, "merging around wildcard of longer pattern");
    Some(merge(long, start, run))
}

/// Pick where the merged run starts when the anchor sits in the longer pattern.
///
/// A run of non-`*` tokens right after the wildcard wins, then one right
/// before it, so the wildcard keeps standing alone. Otherwise the run
/// starts at the wildcard and swallows its neighbours.
fn fallback_start(tokens: &[Token], k: usize, run: usize) -> usize {
    let free = |range: std::ops::Range<usize>| {
        tokens[range]
            .iter()
            .all(|t| !t.segment.is_wildcard_any())
    };

    if k + 1 + run <= tokens.len() && free(k + 1..k + 1 + run) {
        return k + 1;
    }

    if k >= run && free(k - run..k) {
        return k - run;
    }

    k.min(tokens.len() - run)
}

/// Replace `tokens[start..start + run]` with one compound segment
fn merge(pattern: &CompiledPattern, start: usize, run: usize) -> Vec<Cow<'_, Segment>> {
    let tokens = pattern.tokens();
    let end = start + run;

    let mut merged = Vec::with_capacity(tokens.len() - run + 1);
    merged.extend(tokens[..start].iter().map(|t| Cow::Borrowed(&t.segment)));
    merged.push(Cow::Owned(compound(&tokens[start..end], pattern.separator())));
    merged.extend(tokens[end..].iter().map(|t| Cow::Borrowed(&t.segment)));
    merged
}

/// A compound of nothing but `*` is still `*`; anything else is literal text
fn compound(tokens: &[Token], separator: &str) -> Segment {
    if tokens.iter().all(|t| t.segment.is_wildcard_any()) {
        return Segment::WildcardAny;
    }

    let raw: Vec<&str> = tokens.iter().map(|t| t.raw.as_str()).collect();
    Segment::Literal(raw.join(separator))
}
