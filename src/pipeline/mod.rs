//! Pipeline entry points for crawler operations.
//!
//! - `run_crawler`: Discover pages, fetch every listing, write the result file
//! - `collect_listings`: Fetch a known number of pages and merge their listings

pub mod crawl;

pub use crawl::{collect_listings, run_crawler};
