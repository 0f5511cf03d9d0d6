use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.media.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
