use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

use kestrel_extract::{PageSession, QueryError, QueryResult};

use crate::page::CdpPage;
use crate::{Error, Result};

/// How long the readiness probe keeps polling after navigation.
const READY_TIMEOUT: Duration = Duration::from_secs(10);
/// Poll interval for the readiness probe.
const READY_POLL: Duration = Duration::from_millis(250);

/// Script masking the `navigator.webdriver` automation flag.
const MASK_WEBDRIVER: &str =
    "Object.defineProperty(navigator, 'webdriver', {get: () => undefined})";

/// One live CDP connection to a Chrome instance, driving a single tab.
///
/// A session's tab is stateful: navigation replaces whatever the
/// previous extraction was looking at, so each concurrent worker owns
/// its own session.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Connect to a Chrome already listening on `port`. Chrome may not
    /// be ready right after launch, so the connection is retried.
    pub async fn connect(port: u16) -> Result<Self> {
        let ws_url = format!("http://localhost:{}", port);
        tracing::info!("Connecting to Chrome on port {}", port);

        let (browser, mut handler) = {
            let mut retries = 5;
            loop {
                tracing::debug!("Attempting CDP connection to {}...", ws_url);
                match Browser::connect(&ws_url).await {
                    Ok(result) => {
                        tracing::info!("CDP connection established");
                        break result;
                    }
                    Err(e) => {
                        retries -= 1;
                        if retries == 0 {
                            return Err(Error::Cdp(format!(
                                "Failed to connect to Chrome after 5 attempts: {}",
                                e
                            )));
                        }
                        tracing::info!(
                            "CDP connection attempt failed, retrying... ({} left)",
                            retries
                        );
                        tokio::time::sleep(Duration::from_millis(500)).await;
                    }
                }
            }
        };

        // The handler must drain protocol messages or no command makes
        // progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        // Chrome needs a moment to create its initial page.
        tokio::time::sleep(Duration::from_millis(500)).await;

        let page = if let Some(page) = browser.pages().await?.first() {
            tracing::debug!("Adopting existing page");
            page.clone()
        } else {
            tracing::debug!("No existing pages, creating one");
            browser.new_page("about:blank").await?
        };

        if let Err(e) = page.evaluate(MASK_WEBDRIVER).await {
            tracing::debug!("webdriver mask failed (continuing): {}", e);
        }

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// Navigate the session tab and wait for the document to become
    /// ready. A readiness timeout is logged and swallowed: extraction
    /// proceeds against whatever rendered.
    pub async fn goto(&self, url: &str) -> Result<()> {
        tracing::debug!("Navigating to {}", url);
        self.page.goto(url).await?;

        if let Err(e) = self.wait_ready().await {
            tracing::warn!("{}, continuing anyway", e);
        }

        Ok(())
    }

    /// Explicit bounded readiness wait: poll for the document body
    /// until it shows up or the deadline passes.
    async fn wait_ready(&self) -> Result<()> {
        let deadline = tokio::time::Instant::now() + READY_TIMEOUT;

        loop {
            match self.page.find_element("body").await {
                Ok(_) => return Ok(()),
                Err(e) => tracing::debug!("Document not ready yet: {}", e),
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(Error::PageTimeout(READY_TIMEOUT));
            }
            tokio::time::sleep(READY_POLL).await;
        }
    }

    /// Current URL of the session tab.
    pub async fn current_url(&self) -> Result<String> {
        Ok(self.page.url().await?.unwrap_or_default())
    }

    /// Handle for structural queries against the current document.
    pub fn page(&self) -> CdpPage {
        CdpPage::new(self.page.clone())
    }

    /// Tear down the CDP connection. The Chrome process itself belongs
    /// to whoever launched it.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::debug!("Browser close failed (continuing): {}", e);
        }
        self.handler_task.abort();
    }
}

#[async_trait]
impl PageSession for BrowserSession {
    type Page = CdpPage;

    async fn load(&self, url: &str) -> QueryResult<CdpPage> {
        self.goto(url)
            .await
            .map_err(|e| QueryError::Backend(e.to_string()))?;
        Ok(self.page())
    }
}
