use common::requests::{MediaPayload, ReviewPayload, SendCatalogueRequest};
use regex::Regex;

use crate::error::{ApiError, FieldFault};

pub(crate) fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Checks every movie field, collecting one fault per violated constraint so
/// the client sees the whole list at once instead of the first hit.
pub fn check_media(payload: &MediaPayload) -> Result<(), ApiError> {
    let url_re = Regex::new(r"^https?://[^\s]+\.[^\s]+$").unwrap();

    let mut faults = Vec::new();
    if payload.title.is_empty() {
        faults.push(FieldFault {
            field: "Title",
            message: "Invalid title",
        });
    }
    if !(1000..=9999).contains(&payload.year) {
        faults.push(FieldFault {
            field: "Year",
            message: "Invalid year",
        });
    }
    if !is_alphanumeric(&payload.imdb_id) || payload.imdb_id.len() < 9 {
        faults.push(FieldFault {
            field: "imdbID",
            message: "invalid imdbID format",
        });
    }
    if payload.kind != "movie" {
        faults.push(FieldFault {
            field: "Type",
            message: "this is not a movie",
        });
    }
    if !url_re.is_match(&payload.poster) {
        faults.push(FieldFault {
            field: "Poster",
            message: "Invalid Url",
        });
    }

    if faults.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(faults))
    }
}

/// Checks the review fields; `comment` is already guaranteed present by the
/// typed payload.
pub fn check_review(payload: &ReviewPayload) -> Result<(), ApiError> {
    let mut faults = Vec::new();
    if !(0.0..=5.0).contains(&payload.rate) {
        faults.push(FieldFault {
            field: "rate",
            message: "Rating must be a number between 0 and 5",
        });
    }
    if !is_alphanumeric(&payload.element_id) || payload.element_id.len() < 8 {
        faults.push(FieldFault {
            field: "elementID",
            message: "invalid imdb ID",
        });
    }

    if faults.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(faults))
    }
}

pub fn check_send_catalogue(request: &SendCatalogueRequest) -> Result<(), ApiError> {
    let email_re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    if email_re.is_match(&request.email) {
        Ok(())
    } else {
        Err(ApiError::Validation(vec![FieldFault {
            field: "email",
            message: "Invalid value",
        }]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_payload() -> MediaPayload {
        MediaPayload {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: 1999,
            kind: "movie".to_string(),
            poster: "http://images.example.com/matrix.jpg".to_string(),
        }
    }

    fn review_payload(rate: f64) -> ReviewPayload {
        ReviewPayload {
            element_id: "tt0133093".to_string(),
            comment: "ok".to_string(),
            rate,
        }
    }

    fn faults(result: Result<(), ApiError>) -> Vec<FieldFault> {
        match result {
            Err(ApiError::Validation(faults)) => faults,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn a_well_formed_movie_passes() {
        assert!(check_media(&movie_payload()).is_ok());
    }

    #[test]
    fn every_violated_movie_field_is_reported() {
        let payload = MediaPayload {
            imdb_id: "tt-12".to_string(),
            title: String::new(),
            year: 99,
            kind: "series".to_string(),
            poster: "not a url".to_string(),
        };
        let faults = faults(check_media(&payload));
        let fields: Vec<&str> = faults.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["Title", "Year", "imdbID", "Type", "Poster"]);
    }

    #[test]
    fn imdb_id_must_be_long_alphanumeric() {
        let mut payload = movie_payload();
        payload.imdb_id = "tt123456".to_string(); // one short of nine
        let faults = faults(check_media(&payload));
        assert_eq!(faults[0].message, "invalid imdbID format");
    }

    #[test]
    fn rate_bounds_are_inclusive() {
        assert!(check_review(&review_payload(0.0)).is_ok());
        assert!(check_review(&review_payload(5.0)).is_ok());
        assert!(check_review(&review_payload(-0.1)).is_err());
        assert!(check_review(&review_payload(5.1)).is_err());
    }

    #[test]
    fn review_element_id_shorter_than_eight_is_rejected() {
        let mut payload = review_payload(3.0);
        payload.element_id = "tt12345".to_string();
        let faults = faults(check_review(&payload));
        assert_eq!(faults[0].field, "elementID");
        assert_eq!(faults[0].message, "invalid imdb ID");
    }

    #[test]
    fn catalogue_request_needs_a_plausible_email() {
        let good = SendCatalogueRequest {
            title: "matrix".to_string(),
            email: "someone@example.com".to_string(),
        };
        assert!(check_send_catalogue(&good).is_ok());

        let bad = SendCatalogueRequest {
            title: "matrix".to_string(),
            email: "not-an-address".to_string(),
        };
        assert!(check_send_catalogue(&bad).is_err());
    }
}
