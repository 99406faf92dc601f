pub mod library;
pub mod record;
pub mod streaming;
pub mod summary;

pub use library::{FavoriteItem, HistoryItem};
pub use record::MovieRecord;
pub use streaming::{RawOffer, StreamingOffer, OFFER_KIND_SUBSCRIPTION};
pub use summary::MovieSummary;
