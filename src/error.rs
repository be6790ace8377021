use thiserror::Error;

/// Malformed alternation syntax found while parsing a `[a|b]` token.
///
/// These are the only errors a match can produce. A value that simply
/// does not match is reported as `false`, never as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Unterminated alternation '{token}': expected the form '[a|b]'")]
    UnterminatedAlternation { token: String },

    #[error("No alternatives in '{token}'")]
    NoAlternatives { token: String },

    #[error("Empty alternative in '{token}'")]
    EmptyAlternative { token: String },
}

impl SyntaxError {
    /// The raw token that failed to parse
    pub fn token(&self) -> &str {
        match self {
            SyntaxError::UnterminatedAlternation { token }
            | SyntaxError::NoAlternatives { token }
            | SyntaxError::EmptyAlternative { token } => token,
        }
    }
}

/// Matcher configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Separator must not be empty")]
    EmptySeparator,
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
