use serde::{Deserialize, Serialize};

/// Offer kind retained by deduplication; rental/purchase offers are dropped.
pub const OFFER_KIND_SUBSCRIPTION: &str = "sub";

/// One streaming offer exactly as the availability provider reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawOffer {
    pub source_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub web_url: String,
}

/// A deduplicated subscription offer, one per provider identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamingOffer {
    pub source_id: i64,
    pub name: String,
    pub kind: String,
    pub web_url: String,
}

impl From<RawOffer> for StreamingOffer {
    fn from(raw: RawOffer) -> Self {
        Self {
            source_id: raw.source_id,
            name: raw.name,
            kind: raw.kind,
            web_url: raw.web_url,
        }
    }
}
