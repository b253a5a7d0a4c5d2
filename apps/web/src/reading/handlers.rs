//! Axum route handlers for the Reading API, plus the request → reading step
//! shared with the HTML pages.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::reading::generator::{ReadingGenerator, ReadingInput};
use crate::reading::types::{reading_title, BirthDate, GeneratedReading, ReadingRequest};
use crate::state::AppState;
use crate::zodiac::{resolve_sign, Sign};

/// A resolved sign plus its reading, ready for presentation.
#[derive(Debug, Clone)]
pub struct Horoscope {
    pub name: String,
    pub sign: Sign,
    /// Raw requested type id, echoed back for titles.
    pub reading_type: String,
    pub reading: GeneratedReading,
}

/// Validates the birth date, resolves the sign, and generates the reading.
///
/// The only error is a validation error for an out-of-range month or day;
/// generation itself never fails.
pub async fn horoscope_for(
    generator: &ReadingGenerator,
    request: &ReadingRequest,
) -> Result<Horoscope, AppError> {
    let birth = BirthDate::new(request.month, request.day, request.year)?;
    let sign = resolve_sign(birth.month, birth.day);
    info!("Resolved {}/{} to {}", birth.month, birth.day, sign);

    let reading = generator
        .generate(&ReadingInput {
            name: &request.name,
            sign,
            birth,
            reading_type: &request.reading_type,
        })
        .await;

    Ok(Horoscope {
        name: request.name.clone(),
        sign,
        reading_type: request.reading_type.clone(),
        reading,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ReadingResponse {
    pub name: String,
    pub sign: Sign,
    pub element: &'static str,
    pub symbol: &'static str,
    pub dates: &'static str,
    pub reading_type: String,
    pub title: &'static str,
    pub reading: GeneratedReading,
}

impl From<Horoscope> for ReadingResponse {
    fn from(h: Horoscope) -> Self {
        let info = h.sign.info();
        Self {
            title: reading_title(&h.reading_type),
            name: h.name,
            sign: h.sign,
            element: info.element.name(),
            symbol: info.symbol,
            dates: info.dates,
            reading_type: h.reading_type,
            reading: h.reading,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/readings
///
/// JSON counterpart of the form route. Always returns a complete reading for
/// a valid birth date.
pub async fn handle_create_reading(
    State(state): State<AppState>,
    Json(request): Json<ReadingRequest>,
) -> Result<Json<ReadingResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let horoscope = horoscope_for(&state.generator, &request).await?;

    Ok(Json(horoscope.into()))
}
