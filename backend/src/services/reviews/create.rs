use actix_web::{web, HttpResponse};
use common::requests::ReviewPayload;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<ReviewPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = state.reviews.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({ "_id": id })))
}
