// Prompt templates for reading generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use chrono::NaiveDate;

use crate::llm_client::prompts::{ASTROLOGER_PERSONA, JSON_ONLY_INSTRUCTION};
use crate::reading::types::{BirthDate, ReadingType};
use crate::zodiac::Sign;

/// Sampling temperature: creative, not deterministic.
pub const READING_TEMPERATURE: f32 = 0.8;
/// Enough for five short sections plus the lucky attributes.
pub const READING_MAX_TOKENS: u32 = 500;

/// System prompt template.
/// Replace: {persona}, {today}, {name}, {birth_date}, {sign}, {element},
///          {traits}, {description}, {sections_schema}, {json_only}
pub const READING_SYSTEM_TEMPLATE: &str = r#"{persona}

Today's date is {today}.

The person asking is named {name}, born on {birth_date}, making them a {sign} ({element} sign).
Key traits: {traits}.

Provide {description}.

Your response MUST be in this exact JSON format:
{
    "sections": {
        {sections_schema}
    },
    "lucky_number": <number between 1-99>,
    "lucky_color": "<a color name>",
    "energy_level": <number between 60-100>
}

Guidelines:
- Be specific and insightful, not generic
- Reference {sign} traits naturally
- Be encouraging but realistic
- Use vivid, evocative language
- Keep each section 2-3 meaningful sentences
- {json_only}"#;

/// User turn template. Replace: {reading_type}
pub const READING_USER_TEMPLATE: &str = "Please provide my {reading_type} horoscope reading.";

/// Builds the system instruction for one reading.
pub fn build_system_prompt(
    today: NaiveDate,
    name: &str,
    birth: BirthDate,
    sign: Sign,
    reading_type: ReadingType,
) -> String {
    let sections_schema = reading_type
        .required_sections()
        .iter()
        .map(|s| format!("\"{}\": \"2-3 sentences of insightful content\"", s.id()))
        .collect::<Vec<_>>()
        .join(", ");

    READING_SYSTEM_TEMPLATE
        .replace("{persona}", ASTROLOGER_PERSONA)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{today}", &today.format("%B %d, %Y").to_string())
        .replace(
            "{birth_date}",
            &format!("{}/{}/{}", birth.month, birth.day, birth.year),
        )
        .replace("{sign}", sign.display_name())
        .replace("{element}", sign.element().name())
        .replace("{traits}", &sign.info().traits.join(", "))
        .replace("{description}", reading_type.prompt_description())
        .replace("{sections_schema}", &sections_schema)
        // Name goes last so braces in user input are never treated as placeholders
        .replace("{name}", name)
}

/// Builds the user turn. Echoes the raw requested type, as submitted.
pub fn build_user_prompt(requested_type: &str) -> String {
    READING_USER_TEMPLATE.replace("{reading_type}", requested_type)
}
