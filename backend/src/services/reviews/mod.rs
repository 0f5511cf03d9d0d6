mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web;
use actix_web::Scope;

const API_PATH: &str = "/reviews";

/// Configures and returns the Actix `Scope` for all review routes.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::post().to(create::process))
        .route("/{id}", web::get().to(get::process))
        .route("/{id}", web::put().to(update::process))
        .route("/{id}", web::delete().to(delete::process))
}
