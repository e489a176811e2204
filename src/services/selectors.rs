//! Compiled CSS selectors for the search results markup.

use scraper::Selector;

use crate::error::{AppError, Result};
use crate::models::ListingSelectors;

/// [`ListingSelectors`] parsed once and shared read-only by every task.
#[derive(Debug)]
pub struct CompiledSelectors {
    pub card: Selector,
    pub title: Selector,
    pub location: Selector,
    pub salary: Selector,
    pub summary: Selector,
    pub pagination: Selector,
    pub pagination_link: Selector,
    pub id_attr: String,
}

impl CompiledSelectors {
    /// Parse every selector, failing on the first invalid one.
    pub fn compile(selectors: &ListingSelectors) -> Result<Self> {
        Ok(Self {
            card: parse_selector(&selectors.card_selector)?,
            title: parse_selector(&selectors.title_selector)?,
            location: parse_selector(&selectors.location_selector)?,
            salary: parse_selector(&selectors.salary_selector)?,
            summary: parse_selector(&selectors.summary_selector)?,
            pagination: parse_selector(&selectors.pagination_selector)?,
            pagination_link: parse_selector(&selectors.pagination_link_selector)?,
            id_attr: selectors.id_attr.clone(),
        })
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
