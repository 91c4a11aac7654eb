//! Side-effect-free redirect decision.

use std::fmt;

use percent_encoding::percent_decode_str;
use url::Url;

use super::glob::AllowedOrigin;
use crate::url_model::{
    has_banned_protocol, has_synthetic_origin, resolve_synthetic, trim_trailing_slash,
};

/// Why a redirect candidate was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Candidate could not be resolved to a URL.
    Unparsable,
    /// Banned protocol, protocol-relative path or control characters.
    Problematic,
    /// Origin matched no allow-list entry.
    NotAllowed,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::Unparsable => "not a valid URL",
            RejectReason::Problematic => "problematic URL",
            RejectReason::NotAllowed => "origin is not in the allowed redirect origins",
        };
        f.write_str(text)
    }
}

/// Outcome of [`check_redirect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectCheck {
    pub allowed: bool,
    pub reason: Option<RejectReason>,
    /// Absolute form of the candidate, when it could be resolved.
    pub url: Option<String>,
}

impl RedirectCheck {
    fn allow(url: Option<String>) -> Self {
        Self {
            allowed: true,
            reason: None,
            url,
        }
    }

    fn reject(reason: RejectReason, url: Option<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            url,
        }
    }
}

/// Decides whether `candidate` may be used as a redirect target.
///
/// Relative candidates are always allowed. With no allow-list configured every
/// candidate is allowed. Otherwise the candidate's origin, minus trailing
/// slashes, must match one of `allowed_origins`. This only picks between the
/// candidate and a fallback; it is not a security boundary on its own.
pub fn check_redirect(
    allowed_origins: Option<&[AllowedOrigin]>,
    own_origin: &str,
    candidate: &str,
) -> RedirectCheck {
    let own = Url::parse(own_origin).ok();
    if is_relative_to(own.as_ref(), candidate) {
        return RedirectCheck::allow(None);
    }

    let resolved = match &own {
        Some(base) => base.join(candidate).or_else(|_| Url::parse(candidate)),
        None => Url::parse(candidate),
    };

    let Some(allowed_origins) = allowed_origins else {
        return RedirectCheck::allow(resolved.ok().map(String::from));
    };

    let url = match resolved {
        Ok(url) => url,
        Err(_) => return RedirectCheck::reject(RejectReason::Unparsable, None),
    };
    if is_problematic_url(&url) {
        return RedirectCheck::reject(RejectReason::Problematic, Some(url.into()));
    }

    let serialized = url.origin().ascii_serialization();
    let origin = trim_trailing_slash(&serialized);
    if allowed_origins.iter().any(|entry| entry.matches(origin)) {
        RedirectCheck::allow(Some(url.into()))
    } else {
        RedirectCheck::reject(RejectReason::NotAllowed, Some(url.into()))
    }
}

/// A candidate is relative when it carries no scheme or authority of its own
/// and, resolved against `own`, stays on `own`'s origin. `http:evil.com` has
/// no authority against an `http` base but leaves an `https` page.
fn is_relative_to(own: Option<&Url>, candidate: &str) -> bool {
    if !resolve_synthetic(candidate).is_some_and(|url| has_synthetic_origin(&url)) {
        return false;
    }
    match own {
        Some(own) => own
            .join(candidate)
            .is_ok_and(|resolved| resolved.origin() == own.origin()),
        None => true,
    }
}

/// True for URLs no redirect should follow: a `javascript:` scheme, a path
/// starting with `//`, or NUL/control characters anywhere in the decoded path.
pub fn is_problematic_url(url: &Url) -> bool {
    if has_banned_protocol(url.as_str()) {
        return true;
    }
    let path = url.path();
    if path.starts_with("//") {
        return true;
    }
    percent_decode_str(path).any(|byte| byte.is_ascii_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWN: &str = "https://app.example.com";

    fn allowed(entries: &[&str]) -> Vec<AllowedOrigin> {
        entries.iter().map(|e| AllowedOrigin::from(*e)).collect()
    }

    #[test]
    fn relative_always_allowed() {
        let empty: Vec<AllowedOrigin> = Vec::new();
        for candidate in ["/relative", "relative", "?q=1", "#frag", ""] {
            assert!(check_redirect(Some(&empty), OWN, candidate).allowed, "{candidate}");
        }
    }

    #[test]
    fn scheme_only_candidate_must_stay_on_own_origin() {
        let list = allowed(&["https://app.example.com"]);
        let check = check_redirect(Some(&list), OWN, "http:evil.com");
        assert!(!check.allowed);
        assert_eq!(check.reason, Some(RejectReason::NotAllowed));
        assert_eq!(check.url.as_deref(), Some("http://evil.com/"));

        // Same scheme as the page: a plain relative path.
        let check = check_redirect(Some(&list), "http://app.example.com", "http:evil.com");
        assert!(check.allowed);
        assert_eq!(check.url, None);
    }

    #[test]
    fn unparsable_own_origin_falls_back_to_synthetic_classification() {
        let empty: Vec<AllowedOrigin> = Vec::new();
        assert!(check_redirect(Some(&empty), "", "/relative").allowed);
        assert!(!check_redirect(Some(&empty), "", "https://evil.com").allowed);
    }

    #[test]
    fn unconfigured_allows_everything() {
        let check = check_redirect(None, OWN, "https://anywhere.com/x");
        assert!(check.allowed);
        assert_eq!(check.url.as_deref(), Some("https://anywhere.com/x"));
    }

    #[test]
    fn wildcard_subdomain_match() {
        let list = allowed(&["https://*.clerk.com"]);
        assert!(check_redirect(Some(&list), OWN, "https://www.clerk.com").allowed);
        let check = check_redirect(Some(&list), OWN, "https://clerk.com");
        assert!(!check.allowed);
        assert_eq!(check.reason, Some(RejectReason::NotAllowed));
        assert_eq!(check.url.as_deref(), Some("https://clerk.com/"));
    }

    #[test]
    fn trailing_slashes_ignored_both_sides() {
        let list = allowed(&["https://example.com///"]);
        assert!(check_redirect(Some(&list), OWN, "https://example.com/a/b").allowed);
    }

    #[test]
    fn empty_list_rejects_absolute() {
        let empty: Vec<AllowedOrigin> = Vec::new();
        assert!(!check_redirect(Some(&empty), OWN, "https://app.example.com/x").allowed);
    }

    #[test]
    fn protocol_relative_uses_own_scheme() {
        let list = allowed(&["https://cdn.example.com"]);
        assert!(check_redirect(Some(&list), OWN, "//cdn.example.com/a").allowed);
        assert!(!check_redirect(Some(&list), OWN, "//evil.com/a").allowed);
    }

    #[test]
    fn javascript_is_problematic() {
        let list = vec![AllowedOrigin::regex(".*").unwrap()];
        let check = check_redirect(Some(&list), OWN, "javascript:alert(1)");
        assert!(!check.allowed);
        assert_eq!(check.reason, Some(RejectReason::Problematic));
    }

    #[test]
    fn regex_entries() {
        let list = vec![AllowedOrigin::regex(r"^https://.*\.example\.org$").unwrap()];
        assert!(check_redirect(Some(&list), OWN, "https://a.example.org/cb").allowed);
        assert!(!check_redirect(Some(&list), OWN, "https://example.org/cb").allowed);
    }

    #[test]
    fn problematic_paths() {
        let url = Url::parse("https://example.com/a%00b").unwrap();
        assert!(is_problematic_url(&url));
        let url = Url::parse("https://example.com/a%0Ab").unwrap();
        assert!(is_problematic_url(&url));
        let url = Url::parse("https://example.com/ok/path").unwrap();
        assert!(!is_problematic_url(&url));
        let url = Url::parse("javascript:void(0)").unwrap();
        assert!(is_problematic_url(&url));
    }
}
