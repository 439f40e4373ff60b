// src/browser/chrome.rs
//! [`PageDriver`] over a real Chrome/Chromium via CDP (`chromiumoxide`).
//!
//! The library is async; this driver owns a private tokio runtime and blocks
//! on every call, so callers stay plain synchronous code on one thread.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    GetNavigationHistoryParams, NavigateToHistoryEntryParams,
};
use chromiumoxide::error::CdpError;
use chromiumoxide::{Element, Page};
use futures::StreamExt;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use super::{Locator, PageDriver};
use crate::config::options::BrowserOptions;
use crate::error::{Result, ScrapeError};

pub struct ChromeDriver {
    rt: Runtime,
    browser: Browser,
    page: Page,
    handler: Option<JoinHandle<()>>,
    closed: bool,
}

impl ChromeDriver {
    /// Start a browser session. Failure here is fatal for a run.
    pub fn launch(opts: &BrowserOptions) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| ScrapeError::Session(format!("runtime: {e}")))?;

        let (browser, page, handler) = rt.block_on(async {
            let mut builder = BrowserConfig::builder();
            if !opts.headless {
                builder = builder.with_head();
            }
            if let Some(exe) = &opts.executable {
                builder = builder.chrome_executable(exe);
            }
            let config = builder.build().map_err(ScrapeError::Session)?;

            let (browser, mut handler) = Browser::launch(config)
                .await
                .map_err(|e| ScrapeError::Session(e.to_string()))?;

            let handle = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if let Err(e) = event {
                        logd!("Chrome: handler event error: {e}");
                    }
                }
            });

            let page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| ScrapeError::Session(e.to_string()))?;

            Ok::<_, ScrapeError>((browser, page, handle))
        })?;

        logf!("Chrome: session started (headless={})", opts.headless);
        Ok(Self { rt, browser, page, handler: Some(handler), closed: false })
    }

    async fn find(page: &Page, loc: &Locator) -> Result<Element> {
        page.find_xpath(loc.to_xpath()).await.map_err(|e| cdp_error(loc, e))
    }
}

/// Classify a CDP failure for one locator. Node/context churn after a
/// navigation is the stale case; everything else is a driver failure.
fn cdp_error(loc: &Locator, e: CdpError) -> ScrapeError {
    if let CdpError::NotFound = e {
        return ScrapeError::not_found(loc, std::time::Duration::ZERO);
    }
    let msg = e.to_string();
    let lc = msg.to_ascii_lowercase();
    let stale = [
        "no node with given id",
        "could not find node",
        "node is detached",
        "cannot find context with specified id",
        "execution context was destroyed",
    ]
    .iter()
    .any(|pat| lc.contains(pat));

    if stale {
        ScrapeError::StaleReference(format!("{loc}: {msg}"))
    } else {
        ScrapeError::Browser(format!("{loc}: {msg}"))
    }
}

fn browser_error(what: &str, e: CdpError) -> ScrapeError {
    match e {
        CdpError::Timeout => ScrapeError::NavigationTimeout(s!(what)),
        e => ScrapeError::Browser(format!("{what}: {e}")),
    }
}

/// Embed `s` in generated JS as a string literal.
fn js_str(s: &str) -> String {
    serde_json::Value::String(s!(s)).to_string()
}

impl PageDriver for ChromeDriver {
    fn navigate(&mut self, url: &str) -> Result<()> {
        logd!("Chrome: goto {url}");
        self.rt.block_on(async {
            self.page.goto(url).await.map_err(|e| browser_error(url, e))?;
            Ok(())
        })
    }

    fn reload(&mut self) -> Result<()> {
        self.rt.block_on(async {
            self.page.reload().await.map_err(|e| browser_error("reload", e))?;
            Ok(())
        })
    }

    fn back(&mut self) -> Result<()> {
        self.rt.block_on(async {
            let history = self
                .page
                .execute(GetNavigationHistoryParams::default())
                .await
                .map_err(|e| browser_error("history", e))?;
            let current = history.result.current_index;
            if current <= 0 {
                return Err(ScrapeError::Browser(s!("back: no previous history entry")));
            }
            let entry = history
                .result
                .entries
                .get((current - 1) as usize)
                .ok_or_else(|| ScrapeError::Browser(s!("back: history entry missing")))?;
            self.page
                .execute(NavigateToHistoryEntryParams::new(entry.id))
                .await
                .map_err(|e| browser_error("back", e))?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| browser_error("back", e))?;
            Ok(())
        })
    }

    fn is_present(&mut self, loc: &Locator) -> Result<bool> {
        let js = format!(
            "document.evaluate({}, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null)\
             .singleNodeValue !== null",
            js_str(&loc.to_xpath())
        );
        self.rt.block_on(async {
            let res = self.page.evaluate(js).await.map_err(|e| cdp_error(loc, e))?;
            // A document mid-navigation answers with nothing; treat as absent.
            Ok(res.into_value::<bool>().unwrap_or(false))
        })
    }

    fn click(&mut self, loc: &Locator) -> Result<()> {
        self.rt.block_on(async {
            let el = Self::find(&self.page, loc).await?;
            el.click().await.map_err(|e| cdp_error(loc, e))?;
            Ok(())
        })
    }

    fn follow(&mut self, loc: &Locator) -> Result<()> {
        self.rt.block_on(async {
            let el = Self::find(&self.page, loc).await?;
            el.click().await.map_err(|e| cdp_error(loc, e))?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| browser_error("follow", e))?;
            Ok(())
        })
    }

    fn fill(&mut self, loc: &Locator, text: &str) -> Result<()> {
        self.rt.block_on(async {
            let el = Self::find(&self.page, loc).await?;
            el.click().await.map_err(|e| cdp_error(loc, e))?;
            el.call_js_fn("function() { this.value = ''; }", false)
                .await
                .map_err(|e| cdp_error(loc, e))?;
            if !text.is_empty() {
                el.type_str(text).await.map_err(|e| cdp_error(loc, e))?;
            }
            Ok(())
        })
    }

    fn select_by_text(&mut self, loc: &Locator, text: &str) -> Result<()> {
        let js = format!(
            r#"(() => {{
                const sel = document.evaluate({xp}, document, null,
                    XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue;
                if (!sel) return false;
                for (const opt of sel.options) {{
                    if (opt.text.trim() === {want}) {{
                        sel.value = opt.value;
                        sel.dispatchEvent(new Event('change', {{ bubbles: true }}));
                        return true;
                    }}
                }}
                return false;
            }})()"#,
            xp = js_str(&loc.to_xpath()),
            want = js_str(text),
        );
        self.rt.block_on(async {
            let res = self.page.evaluate(js).await.map_err(|e| cdp_error(loc, e))?;
            if res.into_value::<bool>().unwrap_or(false) {
                Ok(())
            } else {
                Err(ScrapeError::not_found(format!("{loc} option \"{text}\""), std::time::Duration::ZERO))
            }
        })
    }

    fn page_source(&mut self) -> Result<String> {
        self.rt.block_on(async {
            self.page.content().await.map_err(|e| browser_error("content", e))
        })
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let Self { rt, browser, handler, .. } = self;
        rt.block_on(async {
            let closed = browser.close().await;
            let _ = browser.wait().await;
            if let Some(h) = handler.take() {
                h.abort();
            }
            closed.map(|_| ()).map_err(|e| browser_error("close", e))
        })?;
        logf!("Chrome: session closed");
        Ok(())
    }
}

impl Drop for ChromeDriver {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            loge!("Chrome: close on drop failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdp_timeout_is_a_navigation_timeout() {
        let err = browser_error("https://example.test/", CdpError::Timeout);
        assert!(matches!(err, ScrapeError::NavigationTimeout(ref u) if u == "https://example.test/"));
        assert!(err.is_timeout());
    }

    #[test]
    fn missing_node_is_not_found_and_detached_node_is_stale() {
        let loc = Locator::id("LastName");
        assert!(cdp_error(&loc, CdpError::NotFound).is_timeout());
        let stale = cdp_error(&loc, CdpError::msg("Node is detached from document"));
        assert!(stale.is_stale());
    }
}
