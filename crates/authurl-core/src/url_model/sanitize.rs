//! Scheme policies and href sanitizing for display-bound links.

use url::Url;

/// Which set of schemes a call site refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolPolicy {
    /// Navigation targets: only script execution is refused.
    Navigation,
    /// Rendered hyperlinks: anything that can smuggle script or opaque content.
    Href,
}

impl ProtocolPolicy {
    pub fn banned_schemes(self) -> &'static [&'static str] {
        match self {
            ProtocolPolicy::Navigation => &["javascript"],
            ProtocolPolicy::Href => &["javascript", "data", "vbscript", "blob"],
        }
    }

    /// True if `value` parses as an absolute URL whose scheme this policy bans.
    pub fn bans(self, value: &str) -> bool {
        match Url::parse(value) {
            Ok(url) => self.banned_schemes().contains(&url.scheme()),
            Err(_) => false,
        }
    }

    /// True if `value` begins with `<scheme>:` for a banned scheme, ASCII
    /// case-insensitively. Works on unparsable input too.
    fn bans_prefix(self, value: &str) -> bool {
        let bytes = value.as_bytes();
        self.banned_schemes().iter().any(|scheme| {
            let n = scheme.len();
            bytes.len() > n
                && bytes[n] == b':'
                && bytes[..n].eq_ignore_ascii_case(scheme.as_bytes())
        })
    }
}

/// True iff `value` parses as an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

pub fn is_data_uri(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.scheme() == "data")
}

/// Navigation policy: refuses `javascript:` only.
pub fn has_banned_protocol(value: &str) -> bool {
    ProtocolPolicy::Navigation.bans(value)
}

/// Href policy: refuses `javascript:`, `data:`, `vbscript:` and `blob:`.
pub fn has_banned_href_protocol(value: &str) -> bool {
    ProtocolPolicy::Href.bans(value)
}

/// Returns the trimmed href when it is safe to render, `None` otherwise.
///
/// Empty or whitespace-only input and anything using a scheme from
/// [`ProtocolPolicy::Href`] are refused. Everything else, including strings
/// that are not URLs at all, passes through unchanged.
pub fn sanitize_href(href: Option<&str>) -> Option<&str> {
    let trimmed = href?.trim();
    if trimmed.is_empty() {
        return None;
    }
    if ProtocolPolicy::Href.bans_prefix(trimmed) || has_banned_href_protocol(trimmed) {
        tracing::debug!(href = trimmed, "refusing href with banned scheme");
        return None;
    }
    Some(trimmed)
}
