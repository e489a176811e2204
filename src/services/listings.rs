// src/services/listings.rs

//! Listing extraction.
//!
//! Turns one listing card into a [`ListingRecord`]. A card is handed over as
//! its own serialized sub-tree so extraction can run on any worker thread
//! without touching the page document.
//!
//! The sub-tree is re-parsed on its own, so field selectors only see the
//! card and its descendants: an ancestor combinator that reaches outside the
//! card (`div pre` with the `div` around the card) does not match. Table
//! parts such as `<tr>` are dropped by the body-context fragment parser, so
//! a row card loses its own attributes.

use scraper::{ElementRef, Html, Selector};

use crate::models::ListingRecord;
use crate::services::CompiledSelectors;
use crate::utils::normalize;

/// Extract a listing from the outer HTML of a single card.
///
/// Never fails: a missing field, or an empty fragment, yields empty text.
pub fn extract_listing(card_html: &str, selectors: &CompiledSelectors) -> ListingRecord {
    let fragment = Html::parse_fragment(card_html);
    let card = fragment
        .root_element()
        .children()
        .find_map(ElementRef::wrap);

    match card {
        Some(card) => extract_from_card(card, selectors),
        None => ListingRecord::default(),
    }
}

/// Extract a listing from a card element.
pub fn extract_from_card(card: ElementRef<'_>, selectors: &CompiledSelectors) -> ListingRecord {
    ListingRecord {
        id: card
            .value()
            .attr(&selectors.id_attr)
            .unwrap_or_default()
            .to_string(),
        title: field_text(card, &selectors.title),
        location: field_text(card, &selectors.location),
        salary: field_text(card, &selectors.salary),
        summary: field_text(card, &selectors.summary),
    }
}

/// Normalized text of every match of `selector` within `card`.
fn field_text(card: ElementRef<'_>, selector: &Selector) -> String {
    let raw: String = card.select(selector).flat_map(|el| el.text()).collect();
    normalize(&raw)
}
