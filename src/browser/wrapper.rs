//! Browser lifecycle management
//!
//! Owns the chromiumoxide browser, its CDP event handler task, and the
//! temporary profile directory backing the instance.

use anyhow::Result;
use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::browser::{BrowserError, BrowserResult};

/// Wrapper for Browser and its event handler task
///
/// The handler task MUST be aborted when the browser goes away or it keeps
/// polling a dead websocket; `Drop` takes care of that.
pub struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserWrapper {
    pub(crate) fn new(browser: Browser, handler: JoinHandle<()>, user_data_dir: PathBuf) -> Self {
        Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        }
    }

    /// Open a new tab at the given URL.
    pub async fn new_page(&self, url: &str) -> BrowserResult<Page> {
        self.browser
            .new_page(url)
            .await
            .map_err(|e| BrowserError::PageCreationFailed(e.to_string()))
    }

    /// Close the browser process and remove the profile directory.
    ///
    /// Both `close()` and `wait()` are required: `Drop` only aborts the
    /// handler task, it does not terminate the Chrome process, and the
    /// profile directory cannot be removed until Chrome has released its
    /// file handles.
    pub async fn shutdown(mut self) -> Result<()> {
        info!("Shutting down browser");

        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }

        self.cleanup_profile_dir();
        Ok(())
    }

    /// Remove the temp profile directory (blocking).
    ///
    /// Blocking `std::fs` because this is also reachable from Drop context.
    fn cleanup_profile_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up profile dir {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        self.handler.abort();
        // Browser::drop() kills the Chrome process itself

        if self.user_data_dir.is_some() {
            warn!(
                "BrowserWrapper dropped without shutdown(); profile dir will be orphaned: {}",
                self.user_data_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_default()
            );
        }
    }
}

/// Launch a browser instance and wrap it for scoped ownership.
pub async fn launch(headless: bool, disable_security: bool) -> BrowserResult<BrowserWrapper> {
    info!("Launching browser instance");

    let (browser, handler, user_data_dir) =
        crate::browser_setup::launch_browser(headless, disable_security)
            .await
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

    Ok(BrowserWrapper::new(browser, handler, user_data_dir))
}
