use std::sync::Arc;

use crate::catalog::media::MediaCatalog;
use crate::catalog::reviews::ReviewCatalog;
use crate::config::Settings;
use crate::mailer::Mailer;
use crate::omdb::OmdbClient;

/// Shared application state, assembled once in `main` and cloned into every
/// worker.
///
/// The optional collaborators stay `None` when their settings are absent;
/// the endpoints depending on them answer 503 instead of the process
/// refusing to start.
#[derive(Clone)]
pub struct AppState {
    pub media: Arc<MediaCatalog>,
    pub reviews: Arc<ReviewCatalog>,
    pub mailer: Option<Mailer>,
    pub omdb: Option<OmdbClient>,
    pub settings: Arc<Settings>,
}
