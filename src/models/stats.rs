//! Run statistics.

use chrono::{DateTime, Utc};

/// Summary of a finished crawl run.
#[derive(Debug, Clone)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub page_count: usize,
    pub listing_count: usize,
    /// Where the result file was written
    pub output: String,
}

impl CrawlStats {
    /// Elapsed wall time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        (self.end_time - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}
