// src/models/site.rs

//! The fixed search site the crawler reads from.

use url::Url;

use crate::error::Result;

/// Search query for the first results page.
pub const BASE_URL: &str = "https://kr.indeed.com/jobs?q=python&limit=50";

/// Listings per results page; also the `start` offset step.
pub const PAGE_SIZE: usize = 50;

/// Detail page prefix; a listing's id is appended to it.
pub const DETAIL_URL: &str = "https://kr.indeed.com/viewjob?jk=";

/// Immutable description of the search site, shared by every crawl task.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// First page of search results, without an offset
    pub base_url: String,

    /// Number of listings per page
    pub page_size: usize,

    /// Prefix for detail page links
    pub detail_url: String,

    /// Selectors for the search results markup
    pub selectors: ListingSelectors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            page_size: PAGE_SIZE,
            detail_url: DETAIL_URL.to_string(),
            selectors: ListingSelectors::default(),
        }
    }
}

impl SiteConfig {
    /// URL of the canonical first page, used for page-count discovery.
    pub fn first_page_url(&self) -> Result<String> {
        Ok(Url::parse(&self.base_url)?.to_string())
    }

    /// URL of the results page at `index`, offset by `index * page_size`.
    pub fn page_url(&self, index: usize) -> Result<String> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut()
            .append_pair("start", &(index * self.page_size).to_string());
        Ok(url.to_string())
    }
}

/// CSS selectors for scraping a search results page.
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    /// One listing card
    pub card_selector: String,

    /// Title within a card
    pub title_selector: String,

    /// Location within a card
    pub location_selector: String,

    /// Salary snippet within a card
    pub salary_selector: String,

    /// Summary snippet within a card
    pub summary_selector: String,

    /// Pagination control region
    pub pagination_selector: String,

    /// Page link inside the pagination region
    pub pagination_link_selector: String,

    /// Card attribute holding the listing id
    pub id_attr: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            card_selector: ".tapItem".to_string(),
            title_selector: "h2>span".to_string(),
            location_selector: "div pre".to_string(),
            salary_selector: ".salary-snippet".to_string(),
            summary_selector: ".job-snippet".to_string(),
            pagination_selector: ".pagination".to_string(),
            pagination_link_selector: "a".to_string(),
            id_attr: "id".to_string(),
        }
    }
}
