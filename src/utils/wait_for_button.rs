//! Element polling for client-side rendered pages
//!
//! The consent interstitial is injected by JavaScript after the load event,
//! so the button is polled with exponential backoff instead of being looked
//! up once.

use std::time::Duration;

use chromiumoxide::Page;
use chromiumoxide::element::Element;

use crate::browser::{BrowserError, BrowserResult};

/// Wait for a `<button>` whose trimmed inner text equals `label`.
///
/// Polls starting at 100ms, doubling up to a 1s cap, until `timeout`
/// elapses. Returns `WaitTimeout` when the button never appears.
pub async fn wait_for_button(
    page: &Page,
    label: &str,
    timeout: Duration,
) -> BrowserResult<Element> {
    let start = std::time::Instant::now();
    let mut poll_interval = Duration::from_millis(100);
    let max_interval = Duration::from_secs(1);

    loop {
        if let Some(button) = find_button_by_text(page, label).await {
            return Ok(button);
        }

        if start.elapsed() >= timeout {
            return Err(BrowserError::WaitTimeout {
                selector: format!("//button[text()='{label}']"),
                timeout_ms: timeout.as_millis() as u64,
            });
        }

        tokio::time::sleep(poll_interval).await;
        poll_interval = (poll_interval * 2).min(max_interval);
    }
}

async fn find_button_by_text(page: &Page, label: &str) -> Option<Element> {
    let buttons = page.find_elements("button").await.ok()?;
    for button in buttons {
        if let Ok(Some(text)) = button.inner_text().await {
            if text.trim() == label {
                return Some(button);
            }
        }
    }
    None
}
