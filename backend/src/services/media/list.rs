use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::catalog::media::MediaFilter;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    title: Option<String>,
    year: Option<u32>,
}

// One criterion per call: title beats year beats none.
fn choose_filter(query: ListQuery) -> MediaFilter {
    if let Some(title) = query.title {
        MediaFilter::Title(title)
    } else if let Some(year) = query.year {
        MediaFilter::Year(year)
    } else {
        MediaFilter::All
    }
}

pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let records = state.media.list(&choose_filter(query.into_inner()))?;
    Ok(HttpResponse::Ok().json(records))
}
