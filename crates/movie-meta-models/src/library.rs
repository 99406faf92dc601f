use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::MovieRecord;

/// Entry in the recent-searches collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    pub title: String,
    pub year: String,
    pub poster: String,
    pub imdb_id: String,
    pub added_at: DateTime<Utc>,
}

impl HistoryItem {
    pub fn from_record(record: &MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            year: record.display_year().to_string(),
            poster: record.poster_url().unwrap_or_default().to_string(),
            imdb_id: record.imdb_id.clone().unwrap_or_default(),
            added_at: Utc::now(),
        }
    }
}

/// Entry in the favorites collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteItem {
    pub title: String,
    pub year: String,
    pub poster: String,
    pub rating: String,
    pub added_at: DateTime<Utc>,
}

impl FavoriteItem {
    pub fn from_record(record: &MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            year: record.display_year().to_string(),
            poster: record.poster_url().unwrap_or_default().to_string(),
            rating: record.rating_or_na().to_string(),
            added_at: Utc::now(),
        }
    }
}
