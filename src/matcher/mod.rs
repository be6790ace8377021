mod reconcile;
mod segment;

pub use segment::{Segment, WILDCARD_ANY, WILDCARD_ONE};

use serde::{Deserialize, Serialize};

use crate::compile::CompiledPattern;
use crate::error::{ConfigError, Result};
use crate::parser::extract_alternatives;
use crate::types::{PatternValue, SegmentSequence};

/// Default segment separator
pub const DEFAULT_SEPARATOR: &str = ".";

/// Matcher options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherOptions {
    /// Delimiter used to split text values into segments
    pub separator: String,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl MatcherOptions {
    /// Create new matcher options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building options from the defaults.
    pub fn builder() -> MatcherOptionsBuilder {
        MatcherOptionsBuilder::default()
    }

    /// Set separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MatcherOptionsBuilder {
    options: MatcherOptions,
}

impl MatcherOptionsBuilder {
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }

    pub fn build(self) -> std::result::Result<MatcherOptions, ConfigError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

/// Pairwise matcher for segmented identifiers.
///
/// Two values match when every position is compatible after both sides
/// have been split on the separator and, if their segment counts differ,
/// the longer side has been collapsed around a `*` wildcard.
///
/// The only state is the separator. Matching takes `&self`, so a matcher
/// can be shared between threads; changing the separator needs `&mut self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matcher {
    options: MatcherOptions,
}

impl Matcher {
    /// Create a matcher splitting on `.`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher from validated options
    pub fn with_options(options: MatcherOptions) -> std::result::Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Current options
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Current separator
    pub fn separator(&self) -> &str {
        &self.options.separator
    }

    /// Change the separator used by later calls.
    ///
    /// Already compiled patterns keep the separator they were built with.
    pub fn set_separator(
        &mut self,
        separator: impl Into<String>,
    ) -> std::result::Result<(), ConfigError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        self.options.separator = separator;
        Ok(())
    }

    /// Split a value on the current separator
    pub fn normalize(&self, value: impl Into<PatternValue>) -> SegmentSequence {
        value.into().normalize(self.separator())
    }

    /// Parse an alternation token such as `[name|alternate]`
    pub fn extract_alternatives(&self, token: &str) -> Result<Vec<String>> {
        extract_alternatives(token)
    }

    /// Normalize and classify a value for repeated matching
    pub fn compile(&self, value: impl Into<PatternValue>) -> Result<CompiledPattern> {
        CompiledPattern::compile(&value.into(), self.separator())
    }

    /// Check whether `filter` and `reference` describe the same identifier.
    ///
    /// Either side may carry wildcards and alternations; the check is
    /// symmetric. Fails only on malformed alternation syntax.
    pub fn matches(
        &self,
        filter: impl Into<PatternValue>,
        reference: impl Into<PatternValue>,
    ) -> Result<bool> {
        let filter = self.compile(filter)?;
        let reference = self.compile(reference)?;
        Ok(self.matches_compiled(&filter, &reference))
    }

    /// Match two already compiled patterns
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(filter_len = filter.len() as u64, reference_len = reference.len() as u64)
    )]
    pub fn matches_compiled(&self, filter: &CompiledPattern, reference: &CompiledPattern) -> bool {
        if filter.len() == reference.len() {
            return filter
                .tokens()
                .iter()
                .zip(reference.tokens())
                .all(|(a, b)| a.segment.is_compatible(&b.segment));
        }

        let (short, long) = if filter.len() < reference.len() {
            (filter, reference)
        } else {
            (reference, filter)
        };

        match reconcile::reconcile(short, long) {
            Some(aligned) => short
                .tokens()
                .iter()
                .zip(aligned.iter())
                .all(|(a, b)| a.segment.is_compatible(b)),
            None => {
                tracing::trace!("no wildcard to absorb surplus segments");
                false
            }
        }
    }
}
