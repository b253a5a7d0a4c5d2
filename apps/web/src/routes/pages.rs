//! The two HTML routes: the birth-details form and the reading page.

use axum::{extract::State, response::Html, Form};
use chrono::{Datelike, Local};

use crate::errors::AppError;
use crate::reading::handlers::horoscope_for;
use crate::reading::types::ReadingRequest;
use crate::render::{render_home_page, render_reading_page};
use crate::state::AppState;

/// GET /
pub async fn handle_home() -> Html<String> {
    Html(render_home_page(Local::now().year()))
}

/// POST /horoscope
///
/// Form fields: name, month, day, year, reading_type (defaults to "daily").
pub async fn handle_horoscope(
    State(state): State<AppState>,
    Form(request): Form<ReadingRequest>,
) -> Result<Html<String>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let horoscope = horoscope_for(&state.generator, &request).await?;

    Ok(Html(render_reading_page(&horoscope)))
}
