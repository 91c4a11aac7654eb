//! `authurl dev-portal [hostname]` – classify an account-portal host.

use anyhow::{bail, Result};
use authurl_core::UrlContext;

pub fn run_dev_portal(ctx: &UrlContext, hostname: Option<&str>) -> Result<()> {
    if hostname.is_none() && ctx.location().is_none() {
        bail!("no hostname given and no location configured");
    }
    let is_dev = ctx.is_dev_account_portal_origin(hostname);
    println!("{}", if is_dev { "development" } else { "production" });
    Ok(())
}
