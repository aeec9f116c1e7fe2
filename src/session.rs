//! Scraping session: one owned browser, one tab, explicit lifecycle
//!
//! The session is the only path to BrickLink documents. Extractors stay pure
//! functions over `scraper::Html`; the session does the fetching, consent
//! dismissal, and render settling, and hands back the parsed tree.

use std::time::Duration;

use chromiumoxide::page::Page;
use scraper::Html;
use tracing::{debug, info};

use crate::browser::{self, BrowserError, BrowserResult, BrowserWrapper};
use crate::extract::cross_refs::Category;
use crate::utils::constants::{CONSENT_BUTTON_TEXT, catalog_item_in_url, catalog_item_url};
use crate::utils::wait_for_button::wait_for_button;
use crate::Config;

pub struct Session {
    wrapper: BrowserWrapper,
    page: Page,
    consent_wait: Duration,
    settle: Duration,
}

impl Session {
    /// Launch a browser and open the blank tab all fetches go through.
    pub async fn launch(config: &Config) -> BrowserResult<Self> {
        let wrapper =
            browser::launch(config.browser.headless, config.browser.disable_security).await?;
        let page = wrapper.new_page("about:blank").await?;

        Ok(Self {
            wrapper,
            page,
            consent_wait: Duration::from_millis(config.consent_wait_ms),
            settle: Duration::from_millis(config.settle_ms),
        })
    }

    /// Fetch the minifig's catalog page, rendered and consent-free.
    ///
    /// Waits (bounded) for the cookie interstitial button, dismisses it, and
    /// lets deferred content settle before snapshotting the page source.
    pub async fn catalog_page(&self, identifier: &str) -> BrowserResult<Html> {
        let url = catalog_item_url(identifier);
        info!("Fetching catalog page: {}", url);
        self.goto(&url).await?;

        let button = wait_for_button(&self.page, CONSENT_BUTTON_TEXT, self.consent_wait).await?;
        self.dismiss_consent(&button).await?;

        tokio::time::sleep(self.settle).await;
        self.page_source().await
    }

    /// Fetch the cross-reference listing page for one appearance category.
    pub async fn appearance_page(
        &self,
        identifier: &str,
        category: Category,
    ) -> BrowserResult<Html> {
        let url = catalog_item_in_url(identifier, category.query());
        info!("Fetching {} listing: {}", category.noun().to_lowercase(), url);
        self.goto(&url).await?;
        self.page_source().await
    }

    /// Close the browser and release the profile directory.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        let Session { wrapper, .. } = self;
        wrapper.shutdown().await
    }

    async fn goto(&self, url: &str) -> BrowserResult<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed(e.to_string()))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| BrowserError::NavigationFailed(e.to_string()))?;
        Ok(())
    }

    /// Click the consent button, falling back to a JS-dispatched click when
    /// the overlay intercepts the synthesized pointer event.
    async fn dismiss_consent(&self, button: &chromiumoxide::element::Element) -> BrowserResult<()> {
        if button.click().await.is_ok() {
            debug!("Dismissed consent interstitial");
            return Ok(());
        }

        debug!("Direct click failed, dispatching click via JS");
        button
            .call_js_fn("function() { this.click(); }", false)
            .await
            .map_err(|e| BrowserError::InteractionFailed(e.to_string()))?;
        Ok(())
    }

    async fn page_source(&self) -> BrowserResult<Html> {
        let html = self
            .page
            .content()
            .await
            .map_err(|e| BrowserError::NavigationFailed(e.to_string()))?;
        Ok(Html::parse_document(&html))
    }
}
