pub mod aggregate;
pub mod cache;
pub mod collections;
pub mod dedupe;
pub mod error;
pub mod merge;
pub mod session;

pub use aggregate::LookupOrchestrator;
pub use cache::TtlCache;
pub use collections::{BoundedCollection, Keyed};
pub use dedupe::dedupe_offers;
pub use error::LookupError;
pub use merge::{merge_record, SecondaryPayload};
pub use session::{Session, FAVORITES_CAPACITY, HISTORY_CAPACITY};
