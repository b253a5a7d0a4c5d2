//! Fallback reading, the dependency-free reading substituted whenever the
//! text-generation call fails or its reply cannot be parsed.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::reading::types::{GeneratedReading, ReplyValue, Section};

pub const LUCKY_COLORS: [&str; 6] = ["Gold", "Silver", "Azure", "Emerald", "Violet", "Coral"];
pub const FALLBACK_LUCKY_NUMBERS: RangeInclusive<i64> = 1..=99;
/// Narrower than the 60–100 range the model is asked for.
pub const FALLBACK_ENERGY_LEVELS: RangeInclusive<i64> = 70..=95;

/// Builds a fallback reading with one canned sentence per section.
pub fn fallback_reading<R: Rng + ?Sized>(sections: &[Section], rng: &mut R) -> GeneratedReading {
    GeneratedReading {
        sections: sections
            .iter()
            .map(|s| (s.id().to_string(), ReplyValue::from(s.fallback_text())))
            .collect::<BTreeMap<_, _>>(),
        lucky_number: rng.gen_range(FALLBACK_LUCKY_NUMBERS).into(),
        lucky_color: random_lucky_color(rng).into(),
        energy_level: rng.gen_range(FALLBACK_ENERGY_LEVELS).into(),
    }
}

pub fn random_lucky_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LUCKY_COLORS.choose(rng).copied().unwrap_or(LUCKY_COLORS[0])
}
