//! `authurl sanitize <href>` – print the href if it is safe to render.

use anyhow::{bail, Result};
use authurl_core::url_model::sanitize_href;

pub fn run_sanitize(href: &str) -> Result<()> {
    match sanitize_href(Some(href)) {
        Some(safe) => {
            println!("{safe}");
            Ok(())
        }
        None => bail!("refusing unsafe or empty href: {href:?}"),
    }
}
