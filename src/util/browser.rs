use anyhow::{Context, Result};
use tracing::debug;

/// Open an issue page in the user's default browser.
pub fn open_issue(number: u64, url: &str) -> Result<()> {
    debug!(issue = number, url = url, "Opening issue in browser");
    open::that(url).with_context(|| format!("Failed to open issue #{} in browser", number))
}
