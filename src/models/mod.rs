// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod listing;
mod site;
mod stats;

// Re-export all public types
pub use config::{Config, CrawlerConfig, LoggingConfig, OutputConfig};
pub use listing::{LISTING_HEADERS, ListingRecord, PageResult, ResultSet};
pub use site::{BASE_URL, DETAIL_URL, ListingSelectors, PAGE_SIZE, SiteConfig};
pub use stats::CrawlStats;
