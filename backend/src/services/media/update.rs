use actix_web::{web, HttpResponse};
use common::requests::MediaPayload;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<MediaPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let id = state.media.update(&id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "imdbID": id })))
}
