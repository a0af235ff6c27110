use std::fs;
use std::path::{Path, PathBuf};

use torgrab_fetcher::{FetchedPage, GrabError, PageFetcher, ProxyEndpoint};

/// Output rendering for an extracted link sequence.
pub enum LinkFormat {
    Text,
    Json,
}

impl LinkFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Build the proxied fetcher and perform the single GET.
pub async fn fetch_page(
    url: &str,
    proxy: ProxyEndpoint,
    timeout_secs: Option<u64>,
) -> Result<FetchedPage, GrabError> {
    let fetcher = match timeout_secs {
        Some(secs) => PageFetcher::with_timeout(proxy, secs)?,
        None => PageFetcher::new(proxy)?,
    };
    fetcher.fetch(url).await
}

/// Render a link sequence for persistence. Text output is the raw values
/// joined with newlines, exactly as extracted.
pub fn render_links(links: &[String], format: &LinkFormat) -> Result<String, serde_json::Error> {
    match format {
        LinkFormat::Text => Ok(links.join("\n")),
        LinkFormat::Json => serde_json::to_string_pretty(links),
    }
}

/// Expand a leading tilde in a user-supplied output path.
pub fn resolve_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Write produced bytes to the named file.
pub fn save_output(content: &[u8], path: &Path) -> Result<(), GrabError> {
    fs::write(path, content)?;
    Ok(())
}
