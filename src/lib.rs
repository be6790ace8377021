//! Segment Matcher - pairwise matching of dotted/slashed identifiers
//!
//! This library decides whether two values describe the same segmented
//! identifier, such as an event name, a namespaced key, or a routing topic,
//! when either side may carry:
//! - `*` wildcards, standing in for one or more segments
//! - `?` wildcards, standing in for exactly one segment
//! - `[a|b|c]` alternation groups
//!
//! # Example
//!
//! ```rust
//! use segment_matcher::Matcher;
//!
//! let matcher = Matcher::new();
//!
//! assert!(matcher.matches("event.[name|alternate]", "event.name").unwrap());
//! assert!(matcher.matches("services.*.error", "services.x.y.error").unwrap());
//! assert!(matcher.matches(["event", "?"], "event.name").unwrap());
//! assert!(!matcher.matches("event.name", "event.?.post").unwrap());
//!
//! // Malformed alternations are errors, not mismatches
//! assert!(matcher.matches("event.[]", "event.name").is_err());
//! ```
//!
//! # Pattern Syntax
//!
//! | Token | Example | Matches |
//! |-------|---------|---------|
//! | Literal | `event` | The exact same text |
//! | `?` | `event.?` | Any single segment |
//! | `*` | `*.error` | Any content, absorbing extra segments on the other side |
//! | Alternation | `[name\|alternate]` | Any listed alternative; a `*` or `?` member matches anything |
//!
//! Values are split on the separator (`.` by default, see
//! [`Matcher::set_separator`]) unless they are passed in already segmented.

pub mod compile;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use compile::{CompiledPattern, Token};
pub use error::{ConfigError, Result, SyntaxError};
pub use matcher::{
    Matcher, MatcherOptions, MatcherOptionsBuilder, Segment, DEFAULT_SEPARATOR, WILDCARD_ANY,
    WILDCARD_ONE,
};
pub use parser::{extract_alternatives, normalize};
pub use types::{PatternValue, SegmentSequence};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let mut matcher = Matcher::new();

        // Subscription pattern compiled once
        let subscription = matcher.compile("orders.*.[created|updated]").unwrap();

        let events = [
            ("orders.eu.created", true),
            ("orders.eu.west.updated", true),
            ("orders.eu.deleted", false),
            ("invoices.eu.created", false),
        ];
        for (event, expected) in events {
            let event = matcher.compile(event).unwrap();
            assert_eq!(matcher.matches_compiled(&subscription, &event), expected);
        }

        // Same check on slash-separated topics
        matcher.set_separator("/").unwrap();
        assert!(matcher
            .matches("orders/*/[created|updated]", "orders/eu/west/created")
            .unwrap());
        assert!(!matcher.matches("orders.eu.created", "orders/eu/created").unwrap());
    }

    #[test]
    fn test_shared_between_threads() {
        let matcher = Matcher::new();
        std::thread::scope(|s| {
            for i in 0..4 {
                let matcher = &matcher;
                s.spawn(move || {
                    let value = format!("jobs.{}.done", i);
                    assert!(matcher.matches("jobs.?.done", value.as_str()).unwrap());
                    assert!(!matcher.matches("jobs.?.failed", value.as_str()).unwrap());
                });
            }
        });
    }
}
