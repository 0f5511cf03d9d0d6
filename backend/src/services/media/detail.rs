use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Relays the OMDb record for one imdb id; the local collection is not
/// consulted.
pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let client = state
        .omdb
        .as_ref()
        .ok_or_else(|| ApiError::Service("movie lookup is not configured".to_string()))?;
    let body = client.lookup(&path.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}
