//! `authurl merge <url>` – fold a hash sub-route into the main URL.

use anyhow::Result;
use authurl_core::url_model::merge_fragment_into_url;

pub fn run_merge(url: &str) -> Result<()> {
    let merged = merge_fragment_into_url(url)?;
    println!("{merged}");
    Ok(())
}
