use crate::error::{InstallerError, Result};

/// Open a URL with the OS handler (browser, installer, mail client).
pub fn open_url(url: &str) -> Result<()> {
    tracing::debug!("opening {}", url);
    open::that(url).map_err(|e| {
        InstallerError::Other(anyhow::anyhow!(
            "Failed to open URL. You can open it manually:\n  {}\n\nError: {}",
            url,
            e
        ))
    })
}
