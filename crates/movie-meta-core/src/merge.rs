use movie_meta_models::MovieRecord;
use serde_json::{Map, Value};

/// Merged-record field that preserves the secondary provider's
/// identifier for dependent lookups (similar titles).
pub const SECONDARY_ID_FIELD: &str = "tmdb_id";

/// What the secondary provider contributed to one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryPayload {
    pub movie_id: u64,
    pub fields: Map<String, Value>,
}

/// Combine the primary provider's record with an optional secondary one.
///
/// The result is the field-wise union of the secondary fields overlaid
/// by the primary fields: on a name collision the primary value wins,
/// and fields only the secondary provider knows are carried through.
/// With no secondary payload the record is the primary payload
/// unchanged.
pub fn merge_record(
    primary: Map<String, Value>,
    secondary: Option<SecondaryPayload>,
) -> serde_json::Result<MovieRecord> {
    let merged = match secondary {
        None => primary,
        Some(payload) => {
            let mut merged = payload.fields;
            for (name, value) in primary {
                merged.insert(name, value);
            }
            merged.insert(SECONDARY_ID_FIELD.to_string(), Value::from(payload.movie_id));
            merged
        }
    };

    serde_json::from_value(Value::Object(merged))
}
