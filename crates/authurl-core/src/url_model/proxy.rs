//! Absolute-URL resolution, including proxy URLs that may be origin-relative.

use url::Url;

use super::normalize::Location;

/// Resolves `url` against `origin` unless it is already absolute.
///
/// Falls back to returning `url` unchanged when neither parse succeeds.
pub fn relative_to_absolute_url(url: &str, origin: &str) -> String {
    if let Ok(absolute) = Url::parse(url) {
        return absolute.into();
    }
    match Url::parse(origin).and_then(|base| base.join(url)) {
        Ok(resolved) => resolved.into(),
        Err(error) => {
            tracing::debug!(url, origin, %error, "could not resolve relative URL");
            url.to_string()
        }
    }
}

pub fn is_http_or_https(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Proxy URLs are optional; when set they must be http(s) or origin-relative.
pub fn is_valid_proxy_url(value: Option<&str>) -> bool {
    match value {
        None | Some("") => true,
        Some(v) => is_http_or_https(v) || is_proxy_url_relative(v),
    }
}

pub fn is_proxy_url_relative(value: &str) -> bool {
    value.starts_with('/')
}

/// Makes an origin-relative proxy URL absolute using the current location.
/// Absolute values, and relative ones with no location to resolve against,
/// are returned as given.
pub fn proxy_url_to_absolute_url(value: &str, location: Option<&Location>) -> String {
    match location {
        Some(location) if is_proxy_url_relative(value) => {
            relative_to_absolute_url(value, &location.origin())
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_resolves_against_origin() {
        assert_eq!(
            relative_to_absolute_url("/sign-in?x=1", "https://example.com"),
            "https://example.com/sign-in?x=1"
        );
        assert_eq!(
            relative_to_absolute_url("https://other.com/a", "https://example.com"),
            "https://other.com/a"
        );
    }

    #[test]
    fn unresolvable_returns_input() {
        assert_eq!(relative_to_absolute_url("/x", "not an origin"), "/x");
    }

    #[test]
    fn http_or_https_prefix() {
        assert!(is_http_or_https("https://proxy.example.com"));
        assert!(is_http_or_https("HTTP://proxy.example.com"));
        assert!(!is_http_or_https("ftp://proxy.example.com"));
        assert!(!is_http_or_https("/__proxy"));
        assert!(!is_http_or_https("é"));
    }

    #[test]
    fn proxy_url_validity() {
        assert!(is_valid_proxy_url(None));
        assert!(is_valid_proxy_url(Some("")));
        assert!(is_valid_proxy_url(Some("/__proxy")));
        assert!(is_valid_proxy_url(Some("https://proxy.example.com/__proxy")));
        assert!(!is_valid_proxy_url(Some("proxy.example.com")));
    }

    #[test]
    fn proxy_url_made_absolute() {
        let location = Location::parse("https://app.example.com/dashboard").unwrap();
        assert_eq!(
            proxy_url_to_absolute_url("/__proxy", Some(&location)),
            "https://app.example.com/__proxy"
        );
        assert_eq!(
            proxy_url_to_absolute_url("https://p.example.com", Some(&location)),
            "https://p.example.com"
        );
        assert_eq!(proxy_url_to_absolute_url("/__proxy", None), "/__proxy");
    }
}
