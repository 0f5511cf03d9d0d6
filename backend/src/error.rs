use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// One violated field constraint, reported to the client verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct FieldFault {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every way a catalog operation can fail, each mapped onto one HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more field constraints violated; carries the whole set so the
    /// client sees every problem at once.
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<FieldFault>),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),

    /// A collaborator (mail delivery, upstream lookup, PDF rendering) is
    /// unconfigured or misbehaving.
    #[error("{0}")]
    Service(String),
}

#[derive(Serialize)]
struct FaultBody<'a> {
    errors: &'a [FieldFault],
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Service(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Validation(faults) = self {
            return HttpResponse::build(self.status_code()).json(FaultBody { errors: faults });
        }
        let message = match self {
            // The path and OS detail stay in the log, not in the response.
            ApiError::Storage(e) => {
                error!("storage failure: {}", e);
                "storage failure".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(MessageBody { message: &message })
    }
}
