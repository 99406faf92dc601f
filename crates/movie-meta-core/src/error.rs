use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Typed failure of a movie lookup.
///
/// Only the primary metadata provider can fail a lookup; every
/// enrichment failure is absorbed and surfaced as an empty result
/// instead. The three variants stay distinguishable so callers can
/// phrase different guidance.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum LookupError {
    /// No primary-provider record matched the title (user-correctable).
    #[error("Movie '{0}' not found. Try checking the spelling!")]
    NotFound(String),
    /// The provider call hit its deadline (transient; retry is the
    /// caller's choice).
    #[error("Connection timed out. Please try again!")]
    Timeout,
    /// Any other transport failure, detail preserved for display.
    #[error("Network error: {0}")]
    Network(String),
}
