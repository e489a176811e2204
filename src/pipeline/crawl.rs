// src/pipeline/crawl.rs

//! Listing crawl pipeline.
//!
//! Discovers the page count, fetches every page concurrently, and writes
//! the combined listings once all pages have reported back.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::{AppError, Result};
use crate::models::{Config, CrawlStats, LISTING_HEADERS, PageResult, ResultSet, SiteConfig};
use crate::services::PageCrawler;
use crate::storage::ResultWriter;
use crate::utils::http::DocumentFetcher;

/// Run the listing crawler and persist the results.
pub async fn run_crawler(
    config: &Config,
    site: Arc<SiteConfig>,
    fetcher: Arc<dyn DocumentFetcher>,
    writer: &dyn ResultWriter,
) -> Result<CrawlStats> {
    let start_time = Utc::now();
    let pages = PageCrawler::new(fetcher, site)?;

    let page_count = pages.discover_page_count().await?;
    log::info!("Discovered {page_count} result page(s)");

    let results = collect_listings(&pages, page_count, config.crawler.max_concurrent_pages).await?;
    let summary = writer.write(&LISTING_HEADERS, results.listings()).await?;

    let stats = CrawlStats {
        start_time,
        end_time: Utc::now(),
        page_count,
        listing_count: summary.row_count,
        output: summary.location,
    };
    log::info!(
        "Saved {} listing(s) from {} page(s) to {} in {:.2}s",
        stats.listing_count,
        stats.page_count,
        stats.output,
        stats.elapsed_secs()
    );

    Ok(stats)
}

/// Fetch pages `0..page_count` concurrently and merge their listings.
///
/// At most `max_concurrent` pages are in flight when it is non-zero. The
/// first failing page fails the whole collection; pages still in flight
/// are aborted when the task set is dropped.
pub async fn collect_listings(
    pages: &PageCrawler,
    page_count: usize,
    max_concurrent: usize,
) -> Result<ResultSet> {
    let permits = (max_concurrent > 0).then(|| Arc::new(Semaphore::new(max_concurrent)));

    let mut tasks = JoinSet::new();
    for index in 0..page_count {
        let pages = pages.clone();
        let permits = permits.clone();
        tasks.spawn(async move { fetch_with_permit(&pages, index, permits).await });
    }

    let mut results = ResultSet::default();
    while let Some(joined) = tasks.join_next().await {
        let page = joined??;
        log::debug!("Page {} done with {} listing(s)", page.index, page.len());
        results.extend(page);
    }

    Ok(results)
}

/// Fetch one page, holding a semaphore permit for the duration if given.
async fn fetch_with_permit(
    pages: &PageCrawler,
    index: usize,
    permits: Option<Arc<Semaphore>>,
) -> Result<PageResult> {
    let _permit = match permits {
        Some(semaphore) => Some(
            semaphore
                .acquire_owned()
                .await
                .map_err(|e| AppError::crawl(format!("page {index}"), e))?,
        ),
        None => None,
    };
    pages.fetch_page(index).await
}
