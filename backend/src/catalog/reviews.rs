use chrono::Utc;
use common::model::media::MediaRecord;
use common::model::review::ReviewRecord;
use common::requests::ReviewPayload;
use log::info;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::catalog::validate;
use crate::error::ApiError;
use crate::store::JsonStore;

/// Domain rules for the review collection.
///
/// Holds a second, read-only handle on the movie collection: creating a
/// review requires the referenced movie to exist at that moment. The check
/// is creation-time only; deleting the movie later leaves its reviews
/// dangling on purpose.
pub struct ReviewCatalog {
    store: JsonStore<ReviewRecord>,
    media: JsonStore<MediaRecord>,
    write_lock: Mutex<()>,
}

impl ReviewCatalog {
    pub fn new(store: JsonStore<ReviewRecord>, media: JsonStore<MediaRecord>) -> Self {
        ReviewCatalog {
            store,
            media,
            write_lock: Mutex::new(()),
        }
    }

    pub fn list(&self) -> Result<Vec<ReviewRecord>, ApiError> {
        Ok(self.store.load()?)
    }

    pub fn get(&self, id: &str) -> Result<ReviewRecord, ApiError> {
        self.store
            .load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ApiError::NotFound("reviews not found".to_string()))
    }

    /// All reviews of one movie; the movie itself must exist.
    pub fn list_for(&self, media_id: &str) -> Result<Vec<ReviewRecord>, ApiError> {
        let movies = self.media.load()?;
        if !movies.iter().any(|m| m.imdb_id == media_id) {
            return Err(ApiError::NotFound("invalid imdb ID".to_string()));
        }
        Ok(self
            .store
            .load()?
            .into_iter()
            .filter(|r| r.element_id == media_id)
            .collect())
    }

    /// Appends a new review for an existing movie and returns its generated
    /// id.
    pub async fn create(&self, payload: ReviewPayload) -> Result<String, ApiError> {
        validate::check_review(&payload)?;

        let movies = self.media.load()?;
        if !movies.iter().any(|m| m.imdb_id == payload.element_id) {
            return Err(ApiError::NotFound("movie not found".to_string()));
        }

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load()?;
        let record = ReviewRecord {
            id: format!("r{}", Uuid::new_v4().simple()),
            element_id: payload.element_id,
            comment: payload.comment,
            rate: payload.rate,
            created_at: Utc::now(),
            updated_at: None,
        };
        let id = record.id.clone();
        info!("created review {} for movie {}", record.id, record.element_id);
        records.push(record);
        self.store.save(&records)?;
        Ok(id)
    }

    /// Replaces the review's fields, keeping its identity and creation time.
    /// The referenced movie is not re-checked here.
    pub async fn update(&self, id: &str, payload: ReviewPayload) -> Result<String, ApiError> {
        validate::check_review(&payload)?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ApiError::NotFound("review not found".to_string()))?;
        record.element_id = payload.element_id;
        record.comment = payload.comment;
        record.rate = payload.rate;
        record.updated_at = Some(Utc::now());
        self.store.save(&records)?;
        Ok(id.to_string())
    }

    /// Removes the review matching `id`; deleting an absent id is a no-op.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() != before {
            self.store.save(&records)?;
            info!("deleted review {}", id);
        }
        Ok(())
    }
}
