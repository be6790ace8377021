use crate::error::Result;
use crate::matcher::Segment;
use crate::types::PatternValue;

/// One raw segment together with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The segment exactly as it appeared in the input
    pub raw: String,
    /// Classified form of `raw`
    pub segment: Segment,
}

impl Token {
    /// Classify a raw segment
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let segment = Segment::classify(&raw)?;
        Ok(Self { raw, segment })
    }
}

/// A value that has been split and classified, ready for repeated matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    tokens: Vec<Token>,
    separator: String,
}

impl CompiledPattern {
    /// Normalize `value` on `separator` and classify every segment.
    ///
    /// Malformed alternations anywhere in the value fail here, before any
    /// matching happens.
    #[tracing::instrument(level = "trace", skip_all, fields(separator = %separator))]
    pub fn compile(value: &PatternValue, separator: &str) -> Result<Self> {
        let tokens = value
            .normalize(separator)
            .into_iter()
            .map(Token::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tokens,
            separator: separator.to_string(),
        })
    }

    /// Classified tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Separator this pattern was split on; compound segments are rejoined with it
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if there are no segments (only possible for an empty segment list)
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the first `*` segment
    pub fn first_wildcard_any(&self) -> Option<usize> {
        self.tokens.iter().position(|t| t.segment.is_wildcard_any())
    }

    /// Check if any segment is `*`
    pub fn has_wildcard_any(&self) -> bool {
        self.first_wildcard_any().is_some()
    }

    /// Check if every segment is plain literal text
    pub fn is_literal(&self) -> bool {
        self.tokens
            .iter()
            .all(|t| matches!(t.segment, Segment::Literal(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxError;

    #[test]
    fn test_compile_text() {
        let pattern = CompiledPattern::compile(&"event.[a|b].*".into(), ".").unwrap();
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.separator(), ".");
        assert_eq!(pattern.tokens()[0].segment, Segment::Literal("event".into()));
        assert_eq!(
            pattern.tokens()[1].segment,
            Segment::Alternation(vec!["a".into(), "b".into()])
        );
        assert_eq!(pattern.tokens()[2].raw, "*");
        assert_eq!(pattern.first_wildcard_any(), Some(2));
        assert!(!pattern.is_literal());
    }

    #[test]
    fn test_compile_segments_verbatim() {
        let pattern = CompiledPattern::compile(&["event.name", "x"].into(), ".").unwrap();
        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.tokens()[0].raw, "event.name");
        assert!(pattern.is_literal());
        assert!(!pattern.has_wildcard_any());
    }

    #[test]
    fn test_compile_empty_list() {
        let pattern = CompiledPattern::compile(&PatternValue::Segments(vec![]), ".").unwrap();
        assert!(pattern.is_empty());
    }

    #[test]
    fn test_compile_rejects_bad_alternation() {
        let err = CompiledPattern::compile(&"event.[]".into(), ".").unwrap_err();
        assert_eq!(err, SyntaxError::NoAlternatives { token: "[]".into() });
    }
}
