//! Axum route handlers for sign metadata.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::zodiac::{ElementColors, Sign};

#[derive(Debug, Serialize)]
pub struct SignResponse {
    pub id: Sign,
    pub name: &'static str,
    pub element: &'static str,
    pub symbol: &'static str,
    pub constellation: &'static str,
    pub dates: &'static str,
    pub traits: [&'static str; 4],
    pub colors: &'static ElementColors,
}

impl From<Sign> for SignResponse {
    fn from(sign: Sign) -> Self {
        let info = sign.info();
        Self {
            id: sign,
            name: sign.display_name(),
            element: info.element.name(),
            symbol: info.symbol,
            constellation: info.constellation,
            dates: info.dates,
            traits: info.traits,
            colors: info.element.colors(),
        }
    }
}

/// GET /api/v1/signs
pub async fn handle_list_signs() -> Json<Vec<SignResponse>> {
    Json(Sign::ALL.into_iter().map(SignResponse::from).collect())
}

/// GET /api/v1/signs/:id
pub async fn handle_get_sign(Path(id): Path<String>) -> Result<Json<SignResponse>, AppError> {
    Sign::from_id(&id)
        .map(|sign| Json(sign.into()))
        .ok_or_else(|| AppError::NotFound(format!("Unknown sign '{id}'")))
}
