//! Redirects that hand control to server-initiated flows on the frontend API.

use crate::url_model::parse;
use crate::url_model::SYNTHETIC_BASE;

const FRONTEND_API_FLOW_PATHS: &[&str] = &["/oauth/authorize", "/v1/verify", "/v1/tickets/accept"];

/// True when `redirect_url` points at `frontend_api` (a host, optionally
/// with port) on one of the server-initiated flow paths.
pub fn is_redirect_for_frontend_api_flow(frontend_api: &str, redirect_url: &str) -> bool {
    let Ok(url) = parse(redirect_url, Some(SYNTHETIC_BASE)) else {
        return false;
    };
    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => return false,
    };
    host == frontend_api && FRONTEND_API_FLOW_PATHS.contains(&url.path())
}

/// True when the redirect lands on a page that needs the user to act
/// (e.g. an OAuth consent screen) rather than completing silently.
pub fn requires_user_input(redirect_url: &str) -> bool {
    parse(redirect_url, Some(SYNTHETIC_BASE)).is_ok_and(|url| url.path() == "/oauth/authorize")
}
