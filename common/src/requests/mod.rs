use serde::Deserialize;

/// Inbound movie payload for create and update.
///
/// Deliberately typed field-by-field instead of accepting arbitrary JSON:
/// unknown fields are rejected so nothing undeclared can leak into the
/// collection file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaPayload {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Poster")]
    pub poster: String,
}

/// Inbound review payload for create and update.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewPayload {
    #[serde(rename = "elementID")]
    pub element_id: String,
    pub comment: String,
    pub rate: f64,
}

/// Request payload for the catalogue mailing endpoint: the title filter for
/// the exported PDF and the recipient address.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendCatalogueRequest {
    pub title: String,
    pub email: String,
}
