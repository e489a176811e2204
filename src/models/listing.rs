//! Listing data structures.

/// Header row of the exported listings file.
pub const LISTING_HEADERS: [&str; 5] = ["Link", "Title", "Location", "Salary", "Summary"];

/// A job listing extracted from one card on a results page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRecord {
    /// Site-assigned identifier (may be empty, not guaranteed unique)
    pub id: String,

    /// Listing title
    pub title: String,

    /// Work location
    pub location: String,

    /// Salary snippet as shown on the card
    pub salary: String,

    /// Summary snippet as shown on the card
    pub summary: String,
}

impl ListingRecord {
    /// Row for the exported file, with the link built from `detail_url`.
    pub fn to_row(&self, detail_url: &str) -> [String; 5] {
        [
            format!("{}{}", detail_url, self.id),
            self.title.clone(),
            self.location.clone(),
            self.salary.clone(),
            self.summary.clone(),
        ]
    }
}

/// All listings found on a single results page, in no particular order.
#[derive(Debug, Clone, Default)]
pub struct PageResult {
    pub index: usize,
    pub listings: Vec<ListingRecord>,
}

impl PageResult {
    pub fn new(index: usize, listings: Vec<ListingRecord>) -> Self {
        Self { index, listings }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Every listing from every page of a run, in no particular order.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    listings: Vec<ListingRecord>,
}

impl ResultSet {
    /// Append a finished page.
    pub fn extend(&mut self, page: PageResult) {
        self.listings.extend(page.listings);
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }
}
