use serde::{Deserialize, Serialize};

use crate::requests::MediaPayload;

/// One catalog entry as persisted in `media.json`.
///
/// The serialized field names are the public contract of the collection file
/// and of every HTTP response that carries a movie, so their exact spelling
/// (`imdbID`, `Title`, ...) is pinned here with serde renames. `imdb_id` is
/// the primary key of the collection; no surrogate id exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: u32,
    /// Always the literal `"movie"`; kept as a field because the collection
    /// file stores it and clients filter on it.
    #[serde(rename = "Type")]
    pub kind: String,
    /// URL of the poster image. Starts as the client-supplied URL and is
    /// rewritten to a served asset URL after an upload.
    #[serde(rename = "Poster")]
    pub poster: String,
}

impl From<MediaPayload> for MediaRecord {
    fn from(payload: MediaPayload) -> Self {
        MediaRecord {
            imdb_id: payload.imdb_id,
            title: payload.title,
            year: payload.year,
            kind: payload.kind,
            poster: payload.poster,
        }
    }
}
