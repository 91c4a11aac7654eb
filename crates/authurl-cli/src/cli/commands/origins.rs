//! `authurl origins` – show the effective redirect allow-list.

use anyhow::Result;
use authurl_core::config::AuthUrlConfig;
use authurl_core::redirect::AllowedOrigin;
use authurl_core::UrlContext;

/// Configured allow-list if non-empty, otherwise the derived defaults.
pub fn effective_origins(ctx: &UrlContext, cfg: &AuthUrlConfig) -> Result<Vec<AllowedOrigin>> {
    let configured = cfg.allowed_origins()?;
    Ok(ctx.create_allowed_redirect_origins(
        configured.as_deref(),
        &cfg.product_domain,
        cfg.environment,
    ))
}

pub fn run_origins(ctx: &UrlContext, cfg: &AuthUrlConfig, json: bool) -> Result<()> {
    let origins = effective_origins(ctx, cfg)?;
    if json {
        let rendered: Vec<String> = origins.iter().map(ToString::to_string).collect();
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        for origin in &origins {
            println!("{origin}");
        }
    }
    Ok(())
}
