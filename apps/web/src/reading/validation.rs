//! Response validation: how much of the model's reply is trusted.
//!
//! `Shallow` (default): the reply only has to parse as JSON with the reading's
//! keys and a `sections` object. Values pass through untouched, whatever
//! their JSON type, and section keys and numeric ranges are not checked.
//!
//! `Strict` (opt-in): the parsed reading is repaired against the requested
//! reading type before it reaches presentation.

use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::reading::fallback::{
    random_lucky_color, FALLBACK_ENERGY_LEVELS, FALLBACK_LUCKY_NUMBERS,
};
use crate::reading::types::{GeneratedReading, ReadingType, ReplyValue};

pub const LUCKY_NUMBER_RANGE: (i64, i64) = (1, 99);
pub const ENERGY_LEVEL_RANGE: (i64, i64) = (60, 100);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    #[default]
    Shallow,
    Strict,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shallow" => Ok(ValidationMode::Shallow),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(format!(
                "unknown validation mode '{other}' (expected 'shallow' or 'strict')"
            )),
        }
    }
}

/// Applies the validation mode to a parsed reading.
pub fn apply<R: Rng + ?Sized>(
    mode: ValidationMode,
    reading: GeneratedReading,
    reading_type: ReadingType,
    rng: &mut R,
) -> GeneratedReading {
    match mode {
        ValidationMode::Shallow => reading,
        ValidationMode::Strict => repair(reading, reading_type, rng),
    }
}

/// Strict repair:
/// - drops sections the reading type did not ask for
/// - fills missing or blank required sections with the canned sentence
/// - converts non-string section text and colors to their text form
/// - converts `lucky_number` and `energy_level` to integers, clamped to 1–99
///   and 60–100; values with no numeric reading are drawn like the fallback's
/// - replaces a blank `lucky_color` with a palette color
pub fn repair<R: Rng + ?Sized>(
    mut reading: GeneratedReading,
    reading_type: ReadingType,
    rng: &mut R,
) -> GeneratedReading {
    let required = reading_type.required_sections();

    let before = reading.sections.len();
    reading
        .sections
        .retain(|id, _| required.iter().any(|s| s.id() == id.as_str()));
    let dropped = before - reading.sections.len();

    let mut filled = 0;
    for section in required {
        let value = reading
            .sections
            .entry(section.id().to_string())
            .or_insert_with(|| ReplyValue::from(""));
        if value.is_blank() {
            *value = section.fallback_text().into();
            filled += 1;
        } else if !value.is_text() {
            let text = value.as_text().into_owned();
            *value = text.into();
        }
    }

    if dropped > 0 || filled > 0 {
        debug!("Strict validation dropped {dropped} and filled {filled} sections");
    }

    reading.lucky_number = whole_number(
        &reading.lucky_number,
        LUCKY_NUMBER_RANGE,
        FALLBACK_LUCKY_NUMBERS,
        rng,
    );
    reading.energy_level = whole_number(
        &reading.energy_level,
        ENERGY_LEVEL_RANGE,
        FALLBACK_ENERGY_LEVELS,
        rng,
    );

    reading.lucky_color = if reading.lucky_color.is_blank() {
        random_lucky_color(rng).into()
    } else {
        reading.lucky_color.as_text().into_owned().into()
    };

    reading
}

fn whole_number<R: Rng + ?Sized>(
    value: &ReplyValue,
    (min, max): (i64, i64),
    fallback: RangeInclusive<i64>,
    rng: &mut R,
) -> ReplyValue {
    match value.as_integer() {
        Some(n) => n.clamp(min, max).into(),
        None => {
            debug!("Strict validation replaced non-numeric value {value}");
            rng.gen_range(fallback).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use serde_json::{json, Value};

    use super::*;
    use crate::reading::fallback::LUCKY_COLORS;
    use crate::reading::types::Section;

    fn model_reply(sections: &[(&str, &str)], number: i64, color: &str, energy: i64) -> GeneratedReading {
        loose_reply(sections, json!(number), json!(color), json!(energy))
    }

    fn loose_reply(sections: &[(&str, &str)], number: Value, color: Value, energy: Value) -> GeneratedReading {
        GeneratedReading {
            sections: sections
                .iter()
                .map(|(k, v)| (k.to_string(), ReplyValue::from(*v)))
                .collect::<BTreeMap<_, _>>(),
            lucky_number: ReplyValue(number),
            lucky_color: ReplyValue(color),
            energy_level: ReplyValue(energy),
        }
    }

    #[test]
    fn test_shallow_passes_everything_through() {
        let mut rng = StdRng::seed_from_u64(0);
        let reading = model_reply(&[("weather", "Sunny.")], 500, "", -3);
        let out = apply(ValidationMode::Shallow, reading.clone(), ReadingType::Love, &mut rng);
        assert_eq!(out, reading);
    }

    #[test]
    fn test_strict_drops_extra_and_fills_missing_sections() {
        let mut rng = StdRng::seed_from_u64(0);
        let reading = model_reply(
            &[("love", "Romance blooms."), ("career", "Unrequested.")],
            12,
            "Teal",
            77,
        );
        let out = repair(reading, ReadingType::Love, &mut rng);
        assert_eq!(out.sections.len(), 2);
        assert_eq!(out.sections["love"], "Romance blooms.");
        assert_eq!(out.sections["advice"], Section::Advice.fallback_text());
        assert!(!out.sections.contains_key("career"));
        assert_eq!(out.lucky_color, "Teal");
    }

    #[test]
    fn test_strict_replaces_blank_section_text() {
        let mut rng = StdRng::seed_from_u64(0);
        let reading = model_reply(&[("general", "  "), ("advice", "Rest.")], 5, "Red", 80);
        let out = repair(reading, ReadingType::Daily, &mut rng);
        assert_eq!(out.sections["general"], Section::General.fallback_text());
        assert_eq!(out.sections["advice"], "Rest.");
    }

    #[test]
    fn test_strict_clamps_numbers() {
        let mut rng = StdRng::seed_from_u64(0);
        let high = repair(model_reply(&[], 150, "Red", 140), ReadingType::Daily, &mut rng);
        assert_eq!(high.lucky_number, ReplyValue::from(99));
        assert_eq!(high.energy_level, ReplyValue::from(100));

        let low = repair(model_reply(&[], 0, "Red", 12), ReadingType::Daily, &mut rng);
        assert_eq!(low.lucky_number, ReplyValue::from(1));
        assert_eq!(low.energy_level, ReplyValue::from(60));
    }

    #[test]
    fn test_strict_converts_loosely_typed_values() {
        let mut rng = StdRng::seed_from_u64(0);
        let reading = loose_reply(&[("general", "Calm.")], json!("150"), json!(7), json!(88.6));
        let out = repair(reading, ReadingType::Daily, &mut rng);
        assert_eq!(out.lucky_number, ReplyValue::from(99));
        assert_eq!(out.energy_level, ReplyValue::from(89));
        assert_eq!(out.lucky_color, "7");
    }

    #[test]
    fn test_strict_draws_numbers_it_cannot_read() {
        let mut rng = StdRng::seed_from_u64(5);
        let reading = loose_reply(&[], json!("lots"), json!("Red"), json!(null));
        let out = repair(reading, ReadingType::Daily, &mut rng);
        let number = out.lucky_number.as_integer().unwrap();
        let energy = out.energy_level.as_integer().unwrap();
        assert!((1..=99).contains(&number));
        assert!((70..=95).contains(&energy));
    }

    #[test]
    fn test_strict_stringifies_non_text_sections() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut reading = model_reply(&[("advice", "Rest.")], 5, "Red", 80);
        reading
            .sections
            .insert("general".to_string(), ReplyValue(json!(3)));
        let out = repair(reading, ReadingType::Daily, &mut rng);
        assert_eq!(out.sections["general"], "3");
    }

    #[test]
    fn test_strict_fills_blank_color_from_palette() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = repair(model_reply(&[], 9, " ", 70), ReadingType::Health, &mut rng);
        assert!(LUCKY_COLORS.iter().any(|c| out.lucky_color == *c));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("strict".parse::<ValidationMode>(), Ok(ValidationMode::Strict));
        assert_eq!(" Shallow ".parse::<ValidationMode>(), Ok(ValidationMode::Shallow));
        assert!("lenient".parse::<ValidationMode>().is_err());
    }
}
