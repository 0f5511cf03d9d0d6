use actix_web::{web, HttpResponse};
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style::{Style, StyledString};
use genpdf::Document;
use serde::Deserialize;
use std::error::Error;

use common::model::media::MediaRecord;

use crate::catalog::media::MediaFilter;
use crate::error::ApiError;
use crate::state::AppState;

const TABLE_COLUMNS: [&str; 5] = ["Title", "Year", "imdbID", "Type", "Poster"];

#[derive(Debug, Deserialize)]
pub struct CatalogueQuery {
    title: Option<String>,
}

/// `GET /media/catalogue`: renders the catalog as a PDF table, one movie per
/// row. With `?title=` only matching movies are included; an empty match
/// still yields a valid document with just the header row.
pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<CatalogueQuery>,
) -> Result<HttpResponse, ApiError> {
    let filter = match query.into_inner().title {
        Some(title) => MediaFilter::Title(title),
        None => MediaFilter::All,
    };
    let records = state.media.list(&filter)?;
    let pdf = render_catalogue(&records)
        .map_err(|e| ApiError::Service(format!("PDF generation failed: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(("Content-Disposition", "attachment; filename=media.pdf"))
        .body(pdf))
}

/// Load the font family (adjust path/name if needed).
fn load_font() -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>, Box<dyn Error>> {
    // Try to load Arial (if the Arial family TTFs were added to ./fonts).
    // If that fails, fall back to LiberationSans located in the same directory.
    if let Ok(family) = genpdf::fonts::from_files("./fonts", "Arial", None) {
        return Ok(family);
    }
    genpdf::fonts::from_files("./fonts", "LiberationSans", None).map_err(Into::into)
}

/// Builds the catalogue document in memory. Also used by the mail endpoint,
/// which attaches the same PDF instead of serving it.
pub(super) fn render_catalogue(records: &[MediaRecord]) -> Result<Vec<u8>, Box<dyn Error>> {
    let font_family = load_font()?;
    let mut doc = Document::new(font_family);
    doc.set_title("Movie catalogue");

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    let mut heading = Paragraph::new("");
    heading.push(StyledString::new("Movie catalogue", Style::new().bold()));
    doc.push(heading);
    doc.push(Break::new(1));

    let mut table = TableLayout::new(vec![3, 1, 2, 1, 4]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let mut header = table.row();
    for column in TABLE_COLUMNS {
        let mut cell = Paragraph::new("");
        cell.push(StyledString::new(column, Style::new().bold()));
        header.push_element(cell);
    }
    header.push()?;

    for record in records {
        let mut row = table.row();
        for cell in row_cells(record) {
            row.push_element(Paragraph::new(cell));
        }
        row.push()?;
    }
    doc.push(table);

    let mut buffer = Vec::new();
    doc.render(&mut buffer)?;
    Ok(buffer)
}

fn row_cells(record: &MediaRecord) -> [String; 5] {
    [
        record.title.clone(),
        record.year.to_string(),
        record.imdb_id.clone(),
        record.kind.clone(),
        record.poster.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_cells_follow_the_column_order() {
        let record = MediaRecord {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: 1999,
            kind: "movie".to_string(),
            poster: "http://example.com/matrix.jpg".to_string(),
        };

        assert_eq!(
            row_cells(&record),
            [
                "The Matrix".to_string(),
                "1999".to_string(),
                "tt0133093".to_string(),
                "movie".to_string(),
                "http://example.com/matrix.jpg".to_string(),
            ]
        );
        assert_eq!(TABLE_COLUMNS.len(), row_cells(&record).len());
    }
}
