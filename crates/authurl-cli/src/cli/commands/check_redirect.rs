//! `authurl check-redirect <candidate>` – decide whether a redirect is allowed.

use anyhow::Result;
use authurl_core::config::AuthUrlConfig;
use authurl_core::UrlContext;
use serde::Serialize;

use super::origins::effective_origins;

#[derive(Debug, Serialize)]
struct Decision<'a> {
    candidate: &'a str,
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

pub fn run_check_redirect(
    ctx: &UrlContext,
    cfg: &AuthUrlConfig,
    candidate: &str,
    json: bool,
) -> Result<()> {
    let origins = effective_origins(ctx, cfg)?;
    let own_origin = ctx.location().map(|l| l.origin()).unwrap_or_default();
    let guard = ctx.redirect_guard(Some(&origins), &own_origin);

    let check = guard.evaluate(candidate);
    let allowed = check.allowed;

    if json {
        let decision = Decision {
            candidate,
            allowed,
            reason: check.reason.map(|r| r.to_string()),
            url: check.url,
        };
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else if allowed {
        println!("allowed: {candidate}");
    } else {
        let reason = check.reason.map(|r| r.to_string()).unwrap_or_default();
        println!("rejected: {candidate} ({reason})");
    }
    Ok(())
}
