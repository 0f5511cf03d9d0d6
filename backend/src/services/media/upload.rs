use actix_multipart::{Multipart, MultipartError};
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use log::warn;
use std::fs;

use crate::catalog::validate;
use crate::error::{ApiError, FieldFault};
use crate::state::AppState;
use crate::store::StoreError;

const MAX_POSTER_BYTES: usize = 200_000;
const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// `POST /media/{id}/upload`: stores the uploaded poster image under the
/// public directory and points the movie's `Poster` field at it.
///
/// The body must be multipart form data with a single `Poster` file field.
/// Anything that is not an image, or that exceeds 200 kB, is rejected before
/// the catalog is touched.
pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    // Stored ids are alphanumeric, so anything else cannot match a movie.
    // Checking here also keeps path separators out of the poster filename.
    if !validate::is_alphanumeric(&id) {
        return Err(ApiError::NotFound("Invalid IMDB ID".into()));
    }

    let mut poster: Option<(String, Vec<u8>)> = None;
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(bad_multipart)?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .map(str::to_owned);
        if name.as_deref() != Some("Poster") {
            // Drain the unexpected field so the rest of the stream stays
            // readable.
            while let Some(chunk) = field.next().await {
                chunk.map_err(bad_multipart)?;
            }
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned)
            .unwrap_or_default();
        let extension = filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let mime = field
            .content_type()
            .cloned()
            .unwrap_or_else(|| mime_guess::from_path(&filename).first_or_octet_stream());
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str())
            || mime.type_() != mime_guess::mime::IMAGE
        {
            return Err(poster_fault());
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(bad_multipart)?;
            if bytes.len() + chunk.len() > MAX_POSTER_BYTES {
                return Err(poster_fault());
            }
            bytes.extend_from_slice(&chunk);
        }
        poster = Some((extension, bytes));
    }

    let (extension, bytes) = poster.ok_or_else(poster_fault)?;
    let poster_dir = state.settings.public_dir.join("img").join("media");
    fs::create_dir_all(&poster_dir).map_err(|e| StoreError::Write {
        path: poster_dir.clone(),
        source: Box::new(e),
    })?;
    let filename = format!("{}.{}", id, extension);
    let poster_path = poster_dir.join(&filename);
    fs::write(&poster_path, &bytes).map_err(|e| StoreError::Write {
        path: poster_path.clone(),
        source: Box::new(e),
    })?;

    let poster_url = format!("{}/img/media/{}", state.settings.public_base_url, filename);
    match state.media.attach_poster(&id, &poster_url).await {
        Ok(records) => Ok(HttpResponse::Created().json(records)),
        Err(e) => {
            // The catalog was not updated, so the file on disk is a stray.
            let _ = fs::remove_file(&poster_path);
            Err(e)
        }
    }
}

fn poster_fault() -> ApiError {
    ApiError::Validation(vec![FieldFault {
        field: "Poster",
        message: "Only images under 200kb are allowed",
    }])
}

fn bad_multipart(e: MultipartError) -> ApiError {
    warn!("broken poster upload: {}", e);
    ApiError::Validation(vec![FieldFault {
        field: "Poster",
        message: "invalid multipart payload",
    }])
}
