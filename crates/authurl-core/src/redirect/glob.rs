//! Allowed-origin entries and glob-to-regex conversion.

use std::fmt;

use regex::Regex;

use crate::error::{Result, UrlError};
use crate::url_model::trim_trailing_slash;

/// One entry of an allow-list: a literal origin (optionally with `*`
/// wildcards) or a precompiled regular expression.
///
/// String patterns are compiled once, when the entry is built.
#[derive(Debug, Clone)]
pub enum AllowedOrigin {
    Pattern {
        pattern: String,
        /// `None` when the pattern does not compile; such an entry never matches.
        matcher: Option<Regex>,
    },
    Regex(Regex),
}

impl AllowedOrigin {
    /// String entry. Trailing slashes are ignored when matching.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let matcher = match glob_to_regex(trim_trailing_slash(&pattern)) {
            Ok(regex) => Some(regex),
            Err(error) => {
                tracing::debug!(%error, "allowed origin does not compile and will never match");
                None
            }
        };
        AllowedOrigin::Pattern { pattern, matcher }
    }

    pub fn regex(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(AllowedOrigin::Regex)
            .map_err(|source_err| UrlError::Pattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    /// The compiled matcher for this entry.
    pub fn matcher(&self) -> Option<&Regex> {
        match self {
            AllowedOrigin::Pattern { matcher, .. } => matcher.as_ref(),
            AllowedOrigin::Regex(regex) => Some(regex),
        }
    }

    /// Tests an already slash-trimmed origin.
    pub fn matches(&self, origin: &str) -> bool {
        self.matcher().is_some_and(|regex| regex.is_match(origin))
    }
}

impl fmt::Display for AllowedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedOrigin::Pattern { pattern, .. } => f.write_str(pattern),
            AllowedOrigin::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl PartialEq for AllowedOrigin {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AllowedOrigin::Pattern { pattern: a, .. }, AllowedOrigin::Pattern { pattern: b, .. }) => {
                a == b
            }
            (AllowedOrigin::Regex(a), AllowedOrigin::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for AllowedOrigin {
    fn from(pattern: &str) -> Self {
        AllowedOrigin::pattern(pattern)
    }
}

impl From<String> for AllowedOrigin {
    fn from(pattern: String) -> Self {
        AllowedOrigin::pattern(pattern)
    }
}

impl From<Regex> for AllowedOrigin {
    fn from(regex: Regex) -> Self {
        AllowedOrigin::Regex(regex)
    }
}

/// Anchored regex for `pattern` where each `*` matches one or more
/// characters and everything else matches literally.
pub fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');
    for (i, literal) in pattern.split('*').enumerate() {
        if i > 0 {
            source.push_str(".+");
        }
        source.push_str(&regex::escape(literal));
    }
    source.push('$');
    Regex::new(&source).map_err(|source_err| UrlError::Pattern {
        pattern: pattern.to_string(),
        source: source_err,
    })
}
