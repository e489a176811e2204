//! Storage abstractions for listing persistence.
//!
//! A run ends by handing its full result set to a [`ResultWriter`]. The
//! bundled backend writes a single CSV file:
//!
//! ```text
//! Link,Title,Location,Salary,Summary
//! https://kr.indeed.com/viewjob?jk=<id>,<title>,<location>,<salary>,<summary>
//! ```

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ListingRecord;

// Re-export for convenience
pub use local::CsvWriter;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Number of listing rows written (header excluded)
    pub row_count: usize,
    /// Where the rows ended up
    pub location: String,
}

/// Trait for listing storage backends.
#[async_trait]
pub trait ResultWriter: Send + Sync {
    /// Persist a header row followed by one row per listing.
    async fn write(&self, headers: &[&str], rows: &[ListingRecord]) -> Result<WriteSummary>;
}
