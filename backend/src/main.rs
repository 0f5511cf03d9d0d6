mod catalog;
mod config;
mod error;
mod mailer;
mod omdb;
mod services;
mod state;
mod store;

use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::fs;
use std::sync::Arc;

use crate::catalog::media::MediaCatalog;
use crate::catalog::reviews::ReviewCatalog;
use crate::config::Settings;
use crate::mailer::Mailer;
use crate::omdb::OmdbClient;
use crate::state::AppState;
use crate::store::JsonStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let settings = Settings::from_env();

    let media_store =
        JsonStore::open(settings.data_dir.join("media.json")).map_err(std::io::Error::other)?;
    let review_store =
        JsonStore::open(settings.data_dir.join("reviews.json")).map_err(std::io::Error::other)?;
    // Second handle on the movie collection, used by the review catalog for
    // its existence check.
    let media_ref =
        JsonStore::open(settings.data_dir.join("media.json")).map_err(std::io::Error::other)?;
    fs::create_dir_all(settings.public_dir.join("img").join("media"))?;

    if settings.mail.is_none() {
        warn!("MAIL_API_KEY/MAIL_DOMAIN not set, catalogue mailing is disabled");
    }
    if settings.omdb_api_key.is_none() {
        warn!("OMDB_API_KEY not set, movie detail lookups are disabled");
    }

    let host = settings.host.clone();
    let port = settings.port;
    let public_dir = settings.public_dir.clone();
    let state = AppState {
        media: Arc::new(MediaCatalog::new(media_store)),
        reviews: Arc::new(ReviewCatalog::new(review_store, media_ref)),
        mailer: settings.mail.as_ref().map(Mailer::new),
        omdb: settings.omdb_api_key.clone().map(OmdbClient::new),
        settings: Arc::new(settings),
    };

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(state.clone()))
            .service(services::media::configure_routes())
            .service(services::reviews::configure_routes())
            .service(actix_files::Files::new("/img", public_dir.join("img")))
    })
    .bind((host, port))?
    .run()
    .await
}
