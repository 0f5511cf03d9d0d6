use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let records = state.reviews.list_for(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(records))
}
