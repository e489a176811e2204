// src/services/pages.rs

//! Results page crawler.
//!
//! Discovers how many results pages exist and fetches a single page,
//! extracting every listing card on it concurrently.

use std::sync::Arc;

use scraper::Html;
use tokio::task::JoinSet;

use crate::error::Result;
use crate::models::{PageResult, SiteConfig};
use crate::services::{CompiledSelectors, extract_listing};
use crate::utils::http::DocumentFetcher;

/// Fetches and extracts results pages of the search site.
///
/// Cheap to clone; every page task gets its own handle.
#[derive(Clone)]
pub struct PageCrawler {
    fetcher: Arc<dyn DocumentFetcher>,
    site: Arc<SiteConfig>,
    selectors: Arc<CompiledSelectors>,
}

impl PageCrawler {
    /// Create a page crawler, compiling the site's selectors.
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, site: Arc<SiteConfig>) -> Result<Self> {
        let selectors = Arc::new(CompiledSelectors::compile(&site.selectors)?);
        Ok(Self {
            fetcher,
            site,
            selectors,
        })
    }

    /// Count result pages from the pagination control on the first page.
    ///
    /// A first page without pagination has zero pages.
    pub async fn discover_page_count(&self) -> Result<usize> {
        let url = self.site.first_page_url()?;
        log::info!("Requesting: {url}");
        let body = self.fetcher.fetch(&url).await?;
        Ok(count_pages(&body, &self.selectors))
    }

    /// Fetch the page at `index` and extract one listing per card.
    pub async fn fetch_page(&self, index: usize) -> Result<PageResult> {
        let url = self.site.page_url(index)?;
        log::info!("Requesting: {url}");
        let body = self.fetcher.fetch(&url).await?;
        let cards = collect_cards(&body, &self.selectors);

        let expected = cards.len();
        let mut tasks = JoinSet::new();
        for card in cards {
            let selectors = Arc::clone(&self.selectors);
            tasks.spawn(async move { extract_listing(&card, &selectors) });
        }

        let mut listings = Vec::with_capacity(expected);
        while let Some(joined) = tasks.join_next().await {
            listings.push(joined?);
        }
        debug_assert_eq!(listings.len(), expected);

        log::debug!("Page {index}: {} listing(s)", listings.len());
        Ok(PageResult::new(index, listings))
    }
}

/// Link count of the last pagination region, or zero when there is none.
fn count_pages(body: &str, selectors: &CompiledSelectors) -> usize {
    let document = Html::parse_document(body);
    document
        .select(&selectors.pagination)
        .last()
        .map_or(0, |region| region.select(&selectors.pagination_link).count())
}

/// Outer HTML of every listing card, in document order.
fn collect_cards(body: &str, selectors: &CompiledSelectors) -> Vec<String> {
    let document = Html::parse_document(body);
    document.select(&selectors.card).map(|card| card.html()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::AppError;
    use crate::models::ListingRecord;
    use crate::test_utils::{FakeFetcher, cards_html, pagination_html, test_site};

    fn crawler(fetcher: FakeFetcher) -> PageCrawler {
        PageCrawler::new(Arc::new(fetcher), Arc::new(test_site())).unwrap()
    }

    #[tokio::test]
    async fn test_discover_three_pages() {
        let site = test_site();
        let fetcher = FakeFetcher::default().page(site.first_page_url().unwrap(), pagination_html(3));
        assert_eq!(crawler(fetcher).discover_page_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_discover_without_pagination_is_zero() {
        let site = test_site();
        let fetcher = FakeFetcher::default()
            .page(site.first_page_url().unwrap(), "<html><body><p>No results</p></body></html>");
        assert_eq!(crawler(fetcher).discover_page_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_discover_uses_last_pagination_region() {
        let site = test_site();
        let html = r#"<div class="pagination"><a>1</a></div>
                      <div class="pagination"><a>1</a><a>2</a></div>"#;
        let fetcher = FakeFetcher::default().page(site.first_page_url().unwrap(), html);
        assert_eq!(crawler(fetcher).discover_page_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_discover_requests_first_page_without_offset() {
        let site = test_site();
        let fetcher = Arc::new(
            FakeFetcher::default().page(site.first_page_url().unwrap(), pagination_html(1)),
        );
        let crawler = PageCrawler::new(fetcher.clone(), Arc::new(site)).unwrap();
        crawler.discover_page_count().await.unwrap();

        let requests = fetcher.requests();
        assert_eq!(requests, ["https://jobs.test/search?q=rust&limit=50"]);
    }

    #[tokio::test]
    async fn test_discover_fails_on_status() {
        let site = test_site();
        let fetcher = FakeFetcher::default().status(site.first_page_url().unwrap(), 500);
        let err = crawler(fetcher).discover_page_count().await.unwrap_err();
        assert!(err.is_fetch());
    }

    #[tokio::test]
    async fn test_fetch_page_returns_one_listing_per_card() {
        let site = test_site();
        let fetcher = FakeFetcher::default().page(site.page_url(0).unwrap(), cards_html(0, 50));
        let page = crawler(fetcher).fetch_page(0).await.unwrap();

        assert_eq!(page.index, 0);
        assert_eq!(page.len(), 50);

        let mut ids: Vec<_> = page.listings.iter().map(|l| l.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
        assert!(page.listings.iter().all(|l| l.location == "Seoul"));
    }

    #[tokio::test]
    async fn test_fetch_page_without_cards_is_empty() {
        let site = test_site();
        let fetcher = FakeFetcher::default().page(site.page_url(4).unwrap(), cards_html(4, 0));
        let page = crawler(fetcher).fetch_page(4).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_page_uses_offset_url() {
        let site = test_site();
        let fetcher = Arc::new(FakeFetcher::default().page(site.page_url(2).unwrap(), cards_html(2, 1)));
        let crawler = PageCrawler::new(fetcher.clone(), Arc::new(site)).unwrap();
        crawler.fetch_page(2).await.unwrap();

        assert_eq!(
            fetcher.requests(),
            ["https://jobs.test/search?q=rust&limit=50&start=100"]
        );
    }

    #[tokio::test]
    async fn test_fetch_page_normalizes_fields() {
        let site = test_site();
        let html = r#"<html><body>
            <div class="tapItem" id="only"><h2><span> Backend  Engineer </span></h2></div>
        </body></html>"#;
        let fetcher = FakeFetcher::default().page(site.page_url(0).unwrap(), html);
        let page = crawler(fetcher).fetch_page(0).await.unwrap();

        assert_eq!(
            page.listings,
            vec![ListingRecord {
                id: "only".to_string(),
                title: "Backend Engineer".to_string(),
                ..ListingRecord::default()
            }]
        );
    }

    #[tokio::test]
    async fn test_fetch_page_fails_on_status() {
        let site = test_site();
        let fetcher = FakeFetcher::default().status(site.page_url(1).unwrap(), 403);
        let err = crawler(fetcher).fetch_page(1).await.unwrap_err();
        assert!(matches!(err, AppError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_fetch_page_tolerates_invalid_bytes() {
        let site = test_site();
        let mut body = cards_html(1, 3).into_bytes();
        let at = body.windows(6).position(|w| w == b"Python").unwrap();
        body.insert(at, 0xe9);
        let fetcher = FakeFetcher::default().raw(site.page_url(1).unwrap(), &body);

        let page = crawler(fetcher).fetch_page(1).await.unwrap();
        assert_eq!(page.len(), 3);
        assert!(page.listings.iter().all(|l| l.summary.contains("Python")));
        assert!(page.listings.iter().any(|l| l.summary.contains('\u{fffd}')));
    }

    #[test]
    fn test_new_rejects_invalid_selector() {
        let mut site = test_site();
        site.selectors.card_selector = "<<".to_string();
        let result = PageCrawler::new(Arc::new(FakeFetcher::default()), Arc::new(site));
        assert!(result.is_err());
    }
}
