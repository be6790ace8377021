use serde::{Deserialize, Serialize};

use crate::parser::normalize;

/// Ordered raw segments of one value, as produced by [`normalize`]
pub type SegmentSequence = Vec<String>;

/// Input accepted on either side of a match: flat text split on the
/// separator, or a value that is already segmented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternValue {
    /// Flat text such as `"services.*.error"`
    Text(String),
    /// Pre-split segments, taken verbatim
    Segments(Vec<String>),
}

impl PatternValue {
    /// Check if this value still needs splitting
    pub fn is_text(&self) -> bool {
        matches!(self, PatternValue::Text(_))
    }

    /// Split this value into raw segments
    pub fn normalize(&self, separator: &str) -> SegmentSequence {
        normalize(self, separator)
    }
}

impl From<&str> for PatternValue {
    fn from(value: &str) -> Self {
        PatternValue::Text(value.to_string())
    }
}

impl From<String> for PatternValue {
    fn from(value: String) -> Self {
        PatternValue::Text(value)
    }
}

impl From<&String> for PatternValue {
    fn from(value: &String) -> Self {
        PatternValue::Text(value.clone())
    }
}

impl From<Vec<String>> for PatternValue {
    fn from(value: Vec<String>) -> Self {
        PatternValue::Segments(value)
    }
}

impl From<Vec<&str>> for PatternValue {
    fn from(value: Vec<&str>) -> Self {
        PatternValue::Segments(value.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for PatternValue {
    fn from(value: &[&str]) -> Self {
        PatternValue::Segments(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for PatternValue {
    fn from(value: &[String]) -> Self {
        PatternValue::Segments(value.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for PatternValue {
    fn from(value: [&str; N]) -> Self {
        PatternValue::Segments(value.iter().map(|s| s.to_string()).collect())
    }
}
