use std::collections::HashSet;

use movie_meta_models::{RawOffer, StreamingOffer, OFFER_KIND_SUBSCRIPTION};

/// Collapse a noisy offer list into a unique-by-provider subscription set.
///
/// Rental and purchase offers are discarded entirely. Within the
/// remaining offers, the first occurrence per provider identity wins and
/// input order is preserved.
pub fn dedupe_offers(offers: Vec<RawOffer>) -> Vec<StreamingOffer> {
    let mut seen = HashSet::new();
    offers
        .into_iter()
        .filter(|offer| offer.kind == OFFER_KIND_SUBSCRIPTION)
        .filter(|offer| seen.insert(offer.source_id))
        .map(StreamingOffer::from)
        .collect()
}
