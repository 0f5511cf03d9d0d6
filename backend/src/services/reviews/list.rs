use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let records = state.reviews.list()?;
    Ok(HttpResponse::Ok().json(records))
}
