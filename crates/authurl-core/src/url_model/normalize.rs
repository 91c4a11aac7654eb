//! Parsing helpers around `url::Url`, including relative-vs-absolute classification.

use url::Url;

use crate::error::{Result, UrlError};

/// Unrouteable base used only to tell relative inputs from absolute ones.
pub const SYNTHETIC_BASE: &str = "http://synthetic-base.invalid";

/// Base used by the builder when no current location is known.
pub const PLACEHOLDER_BASE: &str = "http://placeholder-base.invalid";

/// Parses `value`, resolving it against `base` when one is given.
pub fn parse(value: &str, base: Option<&str>) -> Result<Url> {
    match base {
        Some(base) => {
            let base = Url::parse(base).map_err(|e| UrlError::parse(base, e))?;
            base.join(value).map_err(|e| UrlError::parse(value, e))
        }
        None => Url::parse(value).map_err(|e| UrlError::parse(value, e)),
    }
}

/// Resolves `value` against [`SYNTHETIC_BASE`].
///
/// Returns `None` only when the input cannot be resolved at all (e.g. a
/// malformed IPv6 authority).
pub fn resolve_synthetic(value: &str) -> Option<Url> {
    Url::parse(SYNTHETIC_BASE).ok()?.join(value).ok()
}

/// True when `url` still carries the synthetic origin, i.e. the input it was
/// resolved from had no scheme or authority of its own.
pub fn has_synthetic_origin(url: &Url) -> bool {
    url.origin().ascii_serialization() == SYNTHETIC_BASE
}

/// Classifies `value` as relative. Never fails: inputs with stray colons or
/// backslashes end up either relative or opaque, never an error.
pub fn is_relative(value: &str) -> bool {
    resolve_synthetic(value).is_some_and(|url| has_synthetic_origin(&url))
}

/// Current page location supplied by the hosting environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    href: Url,
}

impl Location {
    pub fn parse(href: &str) -> Result<Self> {
        let href = parse(href, None)?;
        Ok(Self { href })
    }

    pub fn from_url(href: Url) -> Self {
        Self { href }
    }

    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.href
    }

    pub fn origin(&self) -> String {
        self.href.origin().ascii_serialization()
    }

    pub fn hostname(&self) -> &str {
        self.href.host_str().unwrap_or("")
    }
}
