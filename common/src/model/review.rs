use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One review as persisted in `reviews.json`.
///
/// `id` is generated at creation and never reassigned. `element_id` points at
/// a `MediaRecord::imdb_id`; the reference is checked when the review is
/// created but deleting the movie later leaves the review dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "elementID")]
    pub element_id: String,
    pub comment: String,
    pub rate: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Absent until the record is modified for the first time.
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
