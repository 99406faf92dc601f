pub mod factory;
pub mod omdb;
pub mod outcome;
pub mod tmdb;
pub mod traits;
pub mod watchmode;
pub mod youtube;

pub use factory::{build_providers, ProviderSet};
pub use omdb::OmdbClient;
pub use outcome::ProviderOutcome;
pub use tmdb::TmdbClient;
pub use traits::{PrimaryMetadata, SecondaryMetadata, StreamingAvailability, TrailerSearch};
pub use watchmode::WatchmodeClient;
pub use youtube::YoutubeClient;
