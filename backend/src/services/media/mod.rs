//! # Media Service Module
//!
//! Aggregates every endpoint operating on the movie collection, routing
//! requests under `/media` to one handler per sub-module.
//!
//! ## Registered routes
//!
//! *   **`GET /media`** (`list::process`): the collection, optionally
//!     narrowed by a `title` substring or an exact `year`; `title` wins when
//!     both are present.
//! *   **`POST /media`** (`create::process`): validates and appends one
//!     movie; `201` with the new id, `400` on field faults, `409` on a
//!     duplicate imdb id.
//! *   **`GET /media/catalogue`** (`catalogue::process`): the filtered
//!     collection rendered as a PDF table, served as a download.
//! *   **`POST /media/sendCatalogue`** (`send_catalogue::process`): renders
//!     the same PDF and mails it to the requested address.
//! *   **`GET /media/{id}`** (`detail::process`): relays the OMDb record for
//!     the id.
//! *   **`GET /media/{id}/reviews`** (`movie_reviews::process`): the reviews
//!     of one stored movie.
//! *   **`POST /media/{id}/upload`** (`upload::process`): multipart poster
//!     upload; stores the image under the public directory and rewrites the
//!     record's poster URL.
//! *   **`PUT /media/{id}`** (`update::process`): whole-record replacement.
//! *   **`DELETE /media/{id}`** (`delete::process`): idempotent removal.

mod catalogue;
mod create;
mod delete;
mod detail;
mod list;
mod movie_reviews;
mod send_catalogue;
mod update;
mod upload;

use actix_web::web;
use actix_web::Scope;

const API_PATH: &str = "/media";

/// Configures and returns the Actix `Scope` for all media routes.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::post().to(create::process))
        // Literal segments must come before the `{id}` matchers.
        .route("/catalogue", web::get().to(catalogue::process))
        .route("/sendCatalogue", web::post().to(send_catalogue::process))
        .route("/{id}/reviews", web::get().to(movie_reviews::process))
        .route("/{id}/upload", web::post().to(upload::process))
        .route("/{id}", web::get().to(detail::process))
        .route("/{id}", web::put().to(update::process))
        .route("/{id}", web::delete().to(delete::process))
}
