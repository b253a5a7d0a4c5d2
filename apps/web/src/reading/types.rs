//! Reading types, sections, and the reading object handed to presentation.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// A named slice of reading content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    General,
    Love,
    Career,
    Health,
    Advice,
}

/// Icon shown for section ids the table does not know.
pub const DEFAULT_SECTION_ICON: &str = "✨";

impl Section {
    pub const ALL: [Section; 5] = [
        Section::General,
        Section::Love,
        Section::Career,
        Section::Health,
        Section::Advice,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::General => "general",
            Section::Love => "love",
            Section::Career => "career",
            Section::Health => "health",
            Section::Advice => "advice",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::General => "🌟",
            Section::Love => "💫",
            Section::Career => "🎯",
            Section::Health => "🌿",
            Section::Advice => "💎",
        }
    }

    /// The canned, ready-to-display sentence used by the fallback reading.
    pub fn fallback_text(self) -> &'static str {
        match self {
            Section::General => {
                "The stars are aligning in your favor today. Trust your intuition and embrace the opportunities that come your way."
            }
            Section::Love => {
                "Your heart is open to new connections. Whether single or partnered, meaningful moments await."
            }
            Section::Career => {
                "Professional momentum is building. Your hard work is being noticed by those who matter."
            }
            Section::Health => {
                "Focus on balance today. Small acts of self-care will have lasting positive effects."
            }
            Section::Advice => {
                "Take time for self-reflection and remain open to unexpected blessings."
            }
        }
    }
}

/// Icon for a raw section id as returned by the model. Unknown ids get ✨.
pub fn section_icon(id: &str) -> &'static str {
    Section::from_id(id).map_or(DEFAULT_SECTION_ICON, Section::icon)
}

/// Human title for a raw section id: underscores become spaces, words are capitalized.
pub fn section_title(id: &str) -> String {
    id.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// ────────────────────────────────────────────────────────────────────────────
// Reading types
// ────────────────────────────────────────────────────────────────────────────

/// The requested focus of a reading. Determines which sections are required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingType {
    #[default]
    Daily,
    Love,
    Career,
    Health,
    Comprehensive,
}

/// Title shown for reading-type ids the table does not know.
pub const DEFAULT_READING_TITLE: &str = "Your Reading";

impl ReadingType {
    pub const ALL: [ReadingType; 5] = [
        ReadingType::Daily,
        ReadingType::Love,
        ReadingType::Career,
        ReadingType::Health,
        ReadingType::Comprehensive,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ReadingType::Daily => "daily",
            ReadingType::Love => "love",
            ReadingType::Career => "career",
            ReadingType::Health => "health",
            ReadingType::Comprehensive => "comprehensive",
        }
    }

    pub fn from_id(id: &str) -> Option<ReadingType> {
        ReadingType::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Unrecognized ids silently become `Daily`.
    pub fn from_id_or_default(id: &str) -> ReadingType {
        ReadingType::from_id(id).unwrap_or_default()
    }

    /// Sections the reading must contain, in display order.
    pub fn required_sections(self) -> &'static [Section] {
        match self {
            ReadingType::Daily => &[Section::General, Section::Advice],
            ReadingType::Love => &[Section::Love, Section::Advice],
            ReadingType::Career => &[Section::Career, Section::Advice],
            ReadingType::Health => &[Section::Health, Section::Advice],
            ReadingType::Comprehensive => &Section::ALL,
        }
    }

    /// Phrase describing the reading's focus, injected into the system prompt.
    pub fn prompt_description(self) -> &'static str {
        match self {
            ReadingType::Daily => "a daily horoscope with general guidance for today",
            ReadingType::Love => "a love and relationships focused horoscope",
            ReadingType::Career => "a career and financial guidance horoscope",
            ReadingType::Health => "a health and wellness focused horoscope",
            ReadingType::Comprehensive => "a comprehensive horoscope covering all life areas",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReadingType::Daily => "Today's Cosmic Message",
            ReadingType::Love => "Love & Relationships",
            ReadingType::Career => "Career & Finance",
            ReadingType::Health => "Health & Wellness",
            ReadingType::Comprehensive => "Your Complete Reading",
        }
    }

    /// Label used by the form's reading-type select.
    pub fn form_label(self) -> &'static str {
        match self {
            ReadingType::Daily => "Daily Horoscope",
            ReadingType::Love => "Love & Relationships",
            ReadingType::Career => "Career & Finance",
            ReadingType::Health => "Health & Wellness",
            ReadingType::Comprehensive => "Comprehensive Reading",
        }
    }
}

/// Display title for a raw reading-type id. Unknown ids get "Your Reading".
pub fn reading_title(id: &str) -> &'static str {
    ReadingType::from_id(id).map_or(DEFAULT_READING_TITLE, ReadingType::title)
}

// ────────────────────────────────────────────────────────────────────────────
// Inbound request
// ────────────────────────────────────────────────────────────────────────────

/// A validated birth date as submitted by the form. Only month and day bounds
/// are checked; the year is carried into the prompt as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl BirthDate {
    pub fn new(month: u32, day: u32, year: i32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::Validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(AppError::Validation(format!(
                "day must be between 1 and 31, got {day}"
            )));
        }
        Ok(Self { month, day, year })
    }
}

/// Inbound call from the presentation layer. `reading_type` is the raw id so
/// the original string can still be echoed into the user turn.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingRequest {
    pub name: String,
    pub month: u32,
    pub day: u32,
    pub year: i32,
    #[serde(default = "default_reading_type")]
    pub reading_type: String,
}

pub fn default_reading_type() -> String {
    ReadingType::Daily.id().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Generated reading
// ────────────────────────────────────────────────────────────────────────────

/// One value taken from the model reply, kept as whatever JSON the model sent.
/// Strings display verbatim; any other value displays in its JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplyValue(pub Value);

impl ReplyValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match &self.0 {
            Value::String(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Whole-number reading of the value. Fractions round, numeric strings parse.
    pub fn as_integer(&self) -> Option<i64> {
        let n = match &self.0 {
            Value::Number(n) => return n.as_i64().or_else(|| n.as_f64().map(round_to_i64)),
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then(|| round_to_i64(n))
    }

    pub fn is_text(&self) -> bool {
        self.0.is_string()
    }

    /// Null, or a string of only whitespace.
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

fn round_to_i64(n: f64) -> i64 {
    n.round() as i64
}

impl fmt::Display for ReplyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for ReplyValue {
    fn from(s: &str) -> Self {
        ReplyValue(Value::from(s))
    }
}

impl From<String> for ReplyValue {
    fn from(s: String) -> Self {
        ReplyValue(Value::from(s))
    }
}

impl From<i64> for ReplyValue {
    fn from(n: i64) -> Self {
        ReplyValue(Value::from(n))
    }
}

impl PartialEq<&str> for ReplyValue {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_str() == Some(*other)
    }
}

/// A reading produced per request, either from the model reply or from the
/// fallback tables. Field names match the JSON contract given to the model.
///
/// Every key must be present and `sections` must be an object. The values
/// themselves are whatever JSON the model chose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReading {
    pub sections: BTreeMap<String, ReplyValue>,
    pub lucky_number: ReplyValue,
    pub lucky_color: ReplyValue,
    pub energy_level: ReplyValue,
}

impl GeneratedReading {
    /// Sections in display order: known sections in canonical order, then any
    /// extra ids the model returned, alphabetically.
    pub fn ordered_sections(&self) -> Vec<(&str, &ReplyValue)> {
        let mut ordered: Vec<(&str, &ReplyValue)> = Section::ALL
            .iter()
            .filter_map(|s| {
                self.sections
                    .get_key_value(s.id())
                    .map(|(k, v)| (k.as_str(), v))
            })
            .collect();
        ordered.extend(
            self.sections
                .iter()
                .filter(|(k, _)| Section::from_id(k).is_none())
                .map(|(k, v)| (k.as_str(), v)),
        );
        ordered
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_required_sections_per_type() {
        assert_eq!(
            ReadingType::Daily.required_sections(),
            &[Section::General, Section::Advice]
        );
        assert_eq!(
            ReadingType::Love.required_sections(),
            &[Section::Love, Section::Advice]
        );
        assert_eq!(ReadingType::Comprehensive.required_sections().len(), 5);
        for t in ReadingType::ALL {
            assert_eq!(t.required_sections().last(), Some(&Section::Advice));
        }
    }

    #[test]
    fn test_unknown_reading_type_defaults_to_daily() {
        assert_eq!(ReadingType::from_id_or_default("nonsense"), ReadingType::Daily);
        assert_eq!(ReadingType::from_id_or_default(""), ReadingType::Daily);
        assert_eq!(ReadingType::from_id_or_default("career"), ReadingType::Career);
    }

    #[test]
    fn test_reading_title_defaults_on_miss() {
        assert_eq!(reading_title("love"), "Love & Relationships");
        assert_eq!(reading_title("weekly"), DEFAULT_READING_TITLE);
    }

    #[test]
    fn test_section_icon_defaults_on_miss() {
        assert_eq!(section_icon("career"), "🎯");
        assert_eq!(section_icon("finance"), DEFAULT_SECTION_ICON);
    }

    #[test]
    fn test_section_title() {
        assert_eq!(section_title("advice"), "Advice");
        assert_eq!(section_title("money_matters"), "Money Matters");
        assert_eq!(section_title("LOVE"), "Love");
    }

    #[test]
    fn test_birth_date_bounds() {
        assert!(BirthDate::new(2, 29, 1996).is_ok());
        assert!(matches!(BirthDate::new(13, 1, 1990), Err(AppError::Validation(_))));
        assert!(matches!(BirthDate::new(0, 1, 1990), Err(AppError::Validation(_))));
        assert!(matches!(BirthDate::new(5, 32, 1990), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_reading_request_defaults_to_daily() {
        let req: ReadingRequest = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "month": 12,
            "day": 10,
            "year": 1815
        }))
        .unwrap();
        assert_eq!(req.reading_type, "daily");
    }

    #[test]
    fn test_ordered_sections_puts_known_ids_first() {
        let reading = GeneratedReading {
            sections: BTreeMap::from([
                ("advice".to_string(), ReplyValue::from("a")),
                ("aura".to_string(), ReplyValue::from("x")),
                ("general".to_string(), ReplyValue::from("g")),
            ]),
            lucky_number: ReplyValue::from(7),
            lucky_color: ReplyValue::from("Gold"),
            energy_level: ReplyValue::from(80),
        };
        let ids: Vec<&str> = reading.ordered_sections().iter().map(|(k, _)| *k).collect();
        assert_eq!(ids, vec!["general", "advice", "aura"]);
    }

    #[test]
    fn test_reply_value_text_keeps_json_form() {
        assert_eq!(ReplyValue::from("Gold").as_text(), "Gold");
        assert_eq!(ReplyValue(json!(42.0)).as_text(), "42.0");
        assert_eq!(ReplyValue(json!(7)).to_string(), "7");
        assert_eq!(ReplyValue(json!(true)).as_text(), "true");
        assert_eq!(ReplyValue(Value::Null).as_text(), "null");
    }

    #[test]
    fn test_reply_value_integer_conversion() {
        assert_eq!(ReplyValue(json!(42)).as_integer(), Some(42));
        assert_eq!(ReplyValue(json!(88.6)).as_integer(), Some(89));
        assert_eq!(ReplyValue(json!(" 88 ")).as_integer(), Some(88));
        assert_eq!(ReplyValue(json!("42.4")).as_integer(), Some(42));
        assert_eq!(ReplyValue(json!("lots")).as_integer(), None);
        assert_eq!(ReplyValue(json!([1])).as_integer(), None);
        assert_eq!(ReplyValue(Value::Null).as_integer(), None);
    }

    #[test]
    fn test_reply_value_blankness() {
        assert!(ReplyValue(Value::Null).is_blank());
        assert!(ReplyValue::from("  ").is_blank());
        assert!(!ReplyValue::from("Teal").is_blank());
        assert!(!ReplyValue(json!(0)).is_blank());
    }
}
