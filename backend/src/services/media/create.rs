use actix_web::{web, HttpResponse};
use common::requests::MediaPayload;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<MediaPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = state.media.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({ "id": id })))
}
