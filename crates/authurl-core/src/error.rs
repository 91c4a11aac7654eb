//! Error type for operations that must produce a URL from caller input.

/// Errors raised while composing URLs or compiling origin patterns.
///
/// Predicates in this crate never return these; they answer `false` or
/// `None` for malformed input instead.
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    /// Input could not be parsed as a URL (or resolved against its base).
    #[error("invalid URL `{input}`: {source}")]
    Parse {
        input: String,
        source: url::ParseError,
    },

    /// A configured origin pattern did not compile to a regular expression.
    #[error("invalid origin pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    /// URL has an opaque path (e.g. `mailto:`) and cannot carry a path or sub-route.
    #[error("URL `{0}` cannot be used as a base")]
    CannotBeABase(String),
}

impl UrlError {
    pub(crate) fn parse(input: &str, source: url::ParseError) -> Self {
        UrlError::Parse {
            input: input.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, UrlError>;
