//! Service layer for the crawler application.
//!
//! This module contains the business logic for:
//! - Results page fetching and page-count discovery (`PageCrawler`)
//! - Listing card extraction (`extract_listing`)
//! - Selector compilation (`CompiledSelectors`)

mod listings;
mod pages;
mod selectors;

pub use listings::{extract_from_card, extract_listing};
pub use pages::PageCrawler;
pub use selectors::CompiledSelectors;
