use actix_web::{web, HttpResponse};

use common::requests::SendCatalogueRequest;

use crate::catalog::media::MediaFilter;
use crate::catalog::validate;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /media/sendCatalogue`: mails the catalogue PDF for every movie whose
/// title matches `title` to the given address. Answers 503 when the service
/// runs without mail credentials.
pub async fn process(
    state: web::Data<AppState>,
    request: web::Json<SendCatalogueRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    validate::check_send_catalogue(&request)?;
    let mailer = state
        .mailer
        .as_ref()
        .ok_or_else(|| ApiError::Service("mail delivery is not configured".to_string()))?;

    let records = state.media.list(&MediaFilter::Title(request.title.clone()))?;
    let pdf = super::catalogue::render_catalogue(&records)
        .map_err(|e| ApiError::Service(format!("PDF generation failed: {}", e)))?;
    mailer.send_catalogue(&request.email, &records, pdf).await?;

    Ok(HttpResponse::Ok().finish())
}
