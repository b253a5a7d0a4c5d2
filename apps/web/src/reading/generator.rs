//! Reading Generation: orchestrates one horoscope reading.
//!
//! Flow: resolve reading type → build prompts → text-generation call (bounded
//! by a timeout) → parse JSON → apply validation mode → return.
//!
//! `generate` never fails. Service errors, timeouts, and unparseable replies
//! all degrade to the fallback reading.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{strip_json_fences, CompletionRequest, LlmError, TextGenerator};
use crate::reading::fallback::fallback_reading;
use crate::reading::prompts::{
    build_system_prompt, build_user_prompt, READING_MAX_TOKENS, READING_TEMPERATURE,
};
use crate::reading::types::{BirthDate, GeneratedReading, ReadingType};
use crate::reading::validation::{self, ValidationMode};
use crate::zodiac::Sign;

/// Failure modes inside the generator. None of them reach the caller.
#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("generation service error: {0}")]
    Service(#[from] LlmError),

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the generator needs to know about one reading.
#[derive(Debug, Clone)]
pub struct ReadingInput<'a> {
    pub name: &'a str,
    pub sign: Sign,
    pub birth: BirthDate,
    /// Raw requested type id; unknown ids fall back to daily.
    pub reading_type: &'a str,
}

#[derive(Clone)]
pub struct ReadingGenerator {
    llm: Arc<dyn TextGenerator>,
    timeout: Duration,
    validation: ValidationMode,
}

impl ReadingGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>, timeout: Duration, validation: ValidationMode) -> Self {
        Self {
            llm,
            timeout,
            validation,
        }
    }

    /// Generates a reading dated today.
    pub async fn generate(&self, input: &ReadingInput<'_>) -> GeneratedReading {
        self.generate_on(Local::now().date_naive(), input).await
    }

    /// Generates a reading as of `today`. Always returns a complete reading.
    pub async fn generate_on(&self, today: NaiveDate, input: &ReadingInput<'_>) -> GeneratedReading {
        let reading_type = ReadingType::from_id_or_default(input.reading_type);

        match self.try_generate(today, input, reading_type).await {
            Ok(reading) => {
                info!(
                    "Generated {} reading for {} ({} sections)",
                    reading_type.id(),
                    input.sign,
                    reading.sections.len()
                );
                validation::apply(self.validation, reading, reading_type, &mut rand::thread_rng())
            }
            Err(e) => {
                warn!(
                    "Reading generation failed, serving fallback {} reading: {e}",
                    reading_type.id()
                );
                fallback_reading(reading_type.required_sections(), &mut rand::thread_rng())
            }
        }
    }

    async fn try_generate(
        &self,
        today: NaiveDate,
        input: &ReadingInput<'_>,
        reading_type: ReadingType,
    ) -> Result<GeneratedReading, ReadingError> {
        let request = CompletionRequest {
            system: build_system_prompt(today, input.name, input.birth, input.sign, reading_type),
            user: build_user_prompt(input.reading_type),
            temperature: READING_TEMPERATURE,
            max_tokens: READING_MAX_TOKENS,
        };

        let reply = tokio::time::timeout(self.timeout, self.llm.complete(&request))
            .await
            .map_err(|_| ReadingError::Timeout(self.timeout))??;

        parse_reading(&reply)
    }
}

/// Shallow parse: the reply must be a JSON object holding every reading key,
/// with `sections` as an object. Values are taken as-is, whatever their type.
pub fn parse_reading(reply: &str) -> Result<GeneratedReading, ReadingError> {
    Ok(serde_json::from_str(strip_json_fences(reply))?)
}
