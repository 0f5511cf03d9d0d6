use crate::error::ApiError;

const OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

/// Thin client for the OMDb lookup API. Responses are relayed verbatim.
#[derive(Clone)]
pub struct OmdbClient {
    client: reqwest::Client,
    api_key: String,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        OmdbClient {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Fetches the OMDb record for one imdb id, returning the raw JSON body.
    pub async fn lookup(&self, imdb_id: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(OMDB_BASE_URL)
            .query(&[("i", imdb_id), ("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Service(format!("movie lookup failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(ApiError::Service(format!(
                "movie lookup failed: {}",
                response.status()
            )));
        }
        response
            .text()
            .await
            .map_err(|e| ApiError::Service(format!("movie lookup failed: {}", e)))
    }
}
