use common::model::media::MediaRecord;
use common::requests::MediaPayload;
use log::info;
use tokio::sync::Mutex;

use crate::catalog::validate;
use crate::error::ApiError;
use crate::store::JsonStore;

/// Which records `list` keeps. Exactly one criterion applies per call; when
/// a request carries several, the route layer picks the winner.
#[derive(Debug, Clone)]
pub enum MediaFilter {
    All,
    /// Case-insensitive substring match on the title.
    Title(String),
    Year(u32),
}

/// Domain rules for the movie collection.
///
/// Every mutation is a load, check, rewrite, save cycle run under the writer
/// lock, so two concurrent writers cannot overwrite each other's snapshot.
/// Reads take no lock; they only load a snapshot.
pub struct MediaCatalog {
    store: JsonStore<MediaRecord>,
    write_lock: Mutex<()>,
}

impl MediaCatalog {
    pub fn new(store: JsonStore<MediaRecord>) -> Self {
        MediaCatalog {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn list(&self, filter: &MediaFilter) -> Result<Vec<MediaRecord>, ApiError> {
        let records = self.store.load()?;
        let result = match filter {
            MediaFilter::All => records,
            MediaFilter::Title(needle) => {
                let needle = needle.to_lowercase();
                records
                    .into_iter()
                    .filter(|r| r.title.to_lowercase().contains(&needle))
                    .collect()
            }
            MediaFilter::Year(year) => records
                .into_iter()
                .filter(|r| r.year == *year)
                .collect(),
        };
        Ok(result)
    }

    /// Appends a new movie; `imdb_id` must not collide with a stored one.
    pub async fn create(&self, payload: MediaPayload) -> Result<String, ApiError> {
        validate::check_media(&payload)?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load()?;
        if records.iter().any(|r| r.imdb_id == payload.imdb_id) {
            return Err(ApiError::Conflict("movie imdb ID is not unique".to_string()));
        }

        let record = MediaRecord::from(payload);
        let id = record.imdb_id.clone();
        records.push(record);
        self.store.save(&records)?;
        info!("created movie {}", id);
        Ok(id)
    }

    /// Replaces the record matching `id` field-for-field with the payload.
    /// The payload may carry a new imdb id, as long as it stays unique.
    pub async fn update(&self, id: &str, payload: MediaPayload) -> Result<String, ApiError> {
        validate::check_media(&payload)?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load()?;
        let position = records
            .iter()
            .position(|r| r.imdb_id == id)
            .ok_or_else(|| ApiError::NotFound("invalid imdb ID".to_string()))?;
        if payload.imdb_id != id && records.iter().any(|r| r.imdb_id == payload.imdb_id) {
            return Err(ApiError::Conflict("movie imdb ID is not unique".to_string()));
        }

        records[position] = MediaRecord::from(payload);
        self.store.save(&records)?;
        Ok(id.to_string())
    }

    /// Rewrites only the poster field of the matching record and returns the
    /// collection as persisted.
    pub async fn attach_poster(
        &self,
        id: &str,
        poster_url: &str,
    ) -> Result<Vec<MediaRecord>, ApiError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.imdb_id == id)
            .ok_or_else(|| ApiError::NotFound("Invalid IMDB ID".to_string()))?;
        record.poster = poster_url.to_string();
        self.store.save(&records)?;
        Ok(records)
    }

    /// Removes the record matching `id`. Deleting an absent id is a no-op,
    /// not an error.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load()?;
        let before = records.len();
        records.retain(|r| r.imdb_id != id);
        if records.len() != before {
            self.store.save(&records)?;
            info!("deleted movie {}", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog(dir: &TempDir) -> MediaCatalog {
        let store = JsonStore::open(dir.path().join("media.json")).unwrap();
        MediaCatalog::new(store)
    }

    fn movie(id: &str, title: &str, year: u32) -> MediaPayload {
        MediaPayload {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year,
            kind: "movie".to_string(),
            poster: "http://images.example.com/poster.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_the_id_and_lists_one_record() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);

        let id = catalog.create(movie("tt0133093", "The Matrix", 1999)).await.unwrap();
        assert_eq!(id, "tt0133093");

        let records = catalog.list(&MediaFilter::All).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].imdb_id, "tt0133093");
    }

    #[tokio::test]
    async fn duplicate_imdb_id_is_a_conflict() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);
        catalog.create(movie("tt0133093", "The Matrix", 1999)).await.unwrap();

        let result = catalog.create(movie("tt0133093", "The Matrix Reloaded", 2003)).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));

        let records = catalog.list(&MediaFilter::All).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "The Matrix");
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_before_any_write() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);

        let result = catalog.create(movie("short", "", 99)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(catalog.list(&MediaFilter::All).unwrap().is_empty());
    }

    #[tokio::test]
    async fn title_filter_is_case_insensitive_substring() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);
        catalog.create(movie("tt0133093", "The Matrix", 1999)).await.unwrap();
        catalog.create(movie("tt0234215", "The Matrix Reloaded", 2003)).await.unwrap();
        catalog.create(movie("tt0109830", "Forrest Gump", 1994)).await.unwrap();

        let hits = catalog.list(&MediaFilter::Title("matrix".to_string())).unwrap();
        assert_eq!(hits.len(), 2);

        let hits = catalog.list(&MediaFilter::Title("GUMP".to_string())).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].imdb_id, "tt0109830");
    }

    #[tokio::test]
    async fn year_filter_matches_exactly() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);
        catalog.create(movie("tt0133093", "The Matrix", 1999)).await.unwrap();
        catalog.create(movie("tt0109830", "Forrest Gump", 1994)).await.unwrap();

        let hits = catalog.list(&MediaFilter::Year(1999)).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].imdb_id, "tt0133093");
        assert!(catalog.list(&MediaFilter::Year(2001)).unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_the_whole_record() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);
        catalog.create(movie("tt0133093", "The Matrix", 1999)).await.unwrap();

        let id = catalog
            .update("tt0133093", movie("tt0133093", "The Matrix (Remastered)", 2021))
            .await
            .unwrap();
        assert_eq!(id, "tt0133093");

        let records = catalog.list(&MediaFilter::All).unwrap();
        assert_eq!(records[0].title, "The Matrix (Remastered)");
        assert_eq!(records[0].year, 2021);
    }

    #[tokio::test]
    async fn update_of_a_missing_movie_is_not_found_and_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);
        catalog.create(movie("tt0133093", "The Matrix", 1999)).await.unwrap();

        let result = catalog
            .update("tt9999999", movie("tt9999999", "Nope", 2022))
            .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        let records = catalog.list(&MediaFilter::All).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "The Matrix");
    }

    #[tokio::test]
    async fn update_cannot_steal_another_movies_id() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);
        catalog.create(movie("tt0133093", "The Matrix", 1999)).await.unwrap();
        catalog.create(movie("tt0109830", "Forrest Gump", 1994)).await.unwrap();

        let result = catalog
            .update("tt0109830", movie("tt0133093", "Forrest Gump", 1994))
            .await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn attach_poster_rewrites_only_the_poster() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);
        catalog.create(movie("tt0133093", "The Matrix", 1999)).await.unwrap();

        let records = catalog
            .attach_poster("tt0133093", "http://localhost:3001/img/media/tt0133093.jpg")
            .await
            .unwrap();
        assert_eq!(records[0].poster, "http://localhost:3001/img/media/tt0133093.jpg");
        assert_eq!(records[0].title, "The Matrix");
        assert_eq!(records[0].year, 1999);
    }

    #[tokio::test]
    async fn attach_poster_to_a_missing_movie_is_not_found() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);

        let result = catalog
            .attach_poster("tt0133093", "http://localhost:3001/img/media/x.jpg")
            .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog(&dir);
        catalog.create(movie("tt0133093", "The Matrix", 1999)).await.unwrap();

        catalog.delete("tt0133093").await.unwrap();
        assert!(catalog.list(&MediaFilter::All).unwrap().is_empty());

        // Deleting the same id again still succeeds.
        catalog.delete("tt0133093").await.unwrap();
        assert!(catalog.list(&MediaFilter::All).unwrap().is_empty());
    }
}
