//! Test utilities shared by the crawler's unit tests.
//!
//! Provides an in-memory document fetcher and builders for search results
//! markup so crawl tests never touch the network.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::SiteConfig;
use crate::utils::http::DocumentFetcher;

/// In-memory fetcher serving canned responses by URL.
///
/// Unknown URLs answer with a 404 status.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, std::result::Result<String, u16>>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn page(mut self, url: String, html: impl Into<String>) -> Self {
        self.pages.insert(url, Ok(html.into()));
        self
    }

    /// Serve raw bytes, decoded leniently like an HTTP response body.
    pub fn raw(mut self, url: String, body: &[u8]) -> Self {
        self.pages
            .insert(url, Ok(String::from_utf8_lossy(body).into_owned()));
        self
    }

    pub fn status(mut self, url: String, status: u16) -> Self {
        self.pages.insert(url, Err(status));
        self
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(AppError::status(url, *status)),
            None => Err(AppError::status(url, 404)),
        }
    }
}

/// Default site pointed at a test host.
pub fn test_site() -> SiteConfig {
    SiteConfig {
        base_url: "https://jobs.test/search?q=rust&limit=50".to_string(),
        ..SiteConfig::default()
    }
}

/// First results page with `links` pagination links.
pub fn pagination_html(links: usize) -> String {
    let anchors: String = (0..links)
        .map(|i| format!(r#"<li><a href="/search?start={}">{}</a></li>"#, i * 50, i + 1))
        .collect();
    format!(r#"<html><body><ul class="pagination">{anchors}</ul></body></html>"#)
}

/// Results page holding `count` cards with ids `p{page}c{i}`.
pub fn cards_html(page: usize, count: usize) -> String {
    let cards: String = (0..count)
        .map(|i| {
            format!(
                r#"<a class="tapItem" id="p{page}c{i}">
                     <h2><span>  Engineer  {page}-{i} </span></h2>
                     <div><pre>Seoul</pre></div>
                     <div class="job-snippet">Rust and Python</div>
                   </a>"#
            )
        })
        .collect();
    format!(r#"<html><body><div id="results">{cards}</div></body></html>"#)
}
