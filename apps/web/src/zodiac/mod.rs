//! Zodiac Resolver: maps a birth month/day to a tropical zodiac sign.
//!
//! Pure and total: every `(month, day)` pair maps to a sign. Pisces is the
//! terminal default branch, so input outside the calendar also resolves to
//! Pisces. Callers that need bounds checking validate before resolving
//! (see `reading::types::BirthDate`).

use std::fmt;

use serde::Serialize;

pub mod handlers;
pub mod signs;

pub use signs::{Element, ElementColors, SignInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Inclusive `(start, end)` windows as `(month, day)` pairs, tested in order.
/// Pisces is absent: it is whatever falls through.
const SIGN_WINDOWS: [(Sign, (u32, u32), (u32, u32)); 11] = [
    (Sign::Aries, (3, 21), (4, 19)),
    (Sign::Taurus, (4, 20), (5, 20)),
    (Sign::Gemini, (5, 21), (6, 20)),
    (Sign::Cancer, (6, 21), (7, 22)),
    (Sign::Leo, (7, 23), (8, 22)),
    (Sign::Virgo, (8, 23), (9, 22)),
    (Sign::Libra, (9, 23), (10, 22)),
    (Sign::Scorpio, (10, 23), (11, 21)),
    (Sign::Sagittarius, (11, 22), (12, 21)),
    (Sign::Capricorn, (12, 22), (1, 19)),
    (Sign::Aquarius, (1, 20), (2, 18)),
];

/// Resolves the sign for a birth month (1–12) and day (1–31).
///
/// Each window spans two adjacent months: the start month from its start day
/// onward, and the end month up to its end day.
pub fn resolve_sign(month: u32, day: u32) -> Sign {
    SIGN_WINDOWS
        .iter()
        .find(|(_, (start_month, start_day), (end_month, end_day))| {
            (month == *start_month && day >= *start_day) || (month == *end_month && day <= *end_day)
        })
        .map(|(sign, _, _)| *sign)
        .unwrap_or(Sign::Pisces)
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Lowercase identifier, e.g. `"sagittarius"`.
    pub fn id(self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }

    /// Title-cased name for display and prompts, e.g. `"Sagittarius"`.
    pub fn display_name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub fn from_id(id: &str) -> Option<Sign> {
        Sign::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn element(self) -> Element {
        self.info().element
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    #[test]
    fn test_boundary_dates() {
        assert_eq!(resolve_sign(3, 20), Sign::Pisces);
        assert_eq!(resolve_sign(3, 21), Sign::Aries);
        assert_eq!(resolve_sign(4, 19), Sign::Aries);
        assert_eq!(resolve_sign(4, 20), Sign::Taurus);
        assert_eq!(resolve_sign(1, 19), Sign::Capricorn);
        assert_eq!(resolve_sign(1, 20), Sign::Aquarius);
        assert_eq!(resolve_sign(12, 21), Sign::Sagittarius);
        assert_eq!(resolve_sign(12, 22), Sign::Capricorn);
        assert_eq!(resolve_sign(2, 18), Sign::Aquarius);
        assert_eq!(resolve_sign(2, 19), Sign::Pisces);
    }

    #[test]
    fn test_every_sign_window_start_and_end() {
        let cases = [
            ((3, 21), (4, 19), Sign::Aries),
            ((4, 20), (5, 20), Sign::Taurus),
            ((5, 21), (6, 20), Sign::Gemini),
            ((6, 21), (7, 22), Sign::Cancer),
            ((7, 23), (8, 22), Sign::Leo),
            ((8, 23), (9, 22), Sign::Virgo),
            ((9, 23), (10, 22), Sign::Libra),
            ((10, 23), (11, 21), Sign::Scorpio),
            ((11, 22), (12, 21), Sign::Sagittarius),
            ((12, 22), (1, 19), Sign::Capricorn),
            ((1, 20), (2, 18), Sign::Aquarius),
            ((2, 19), (3, 20), Sign::Pisces),
        ];
        for ((sm, sd), (em, ed), sign) in cases {
            assert_eq!(resolve_sign(sm, sd), sign, "start of {sign}");
            assert_eq!(resolve_sign(em, ed), sign, "end of {sign}");
        }
    }

    #[test]
    fn test_resolver_is_total_over_form_input() {
        for month in 1..=12 {
            for day in 1..=31 {
                let sign = resolve_sign(month, day);
                assert!(Sign::ALL.contains(&sign));
            }
        }
    }

    #[test]
    fn test_calendar_days_cover_every_sign() {
        // 366 calendar days including Feb 29; each sign gets a contiguous block of 29–32 days
        let mut counts = [0u32; 12];
        for (idx, days) in DAYS_IN_MONTH.iter().enumerate() {
            for day in 1..=*days {
                counts[resolve_sign(idx as u32 + 1, day) as usize] += 1;
            }
        }
        assert_eq!(counts.iter().sum::<u32>(), 366);
        for (sign, count) in Sign::ALL.iter().zip(counts) {
            assert!((29..=32).contains(&count), "{sign} covers {count} days");
        }
    }

    #[test]
    fn test_out_of_range_input_falls_through_to_pisces() {
        assert_eq!(resolve_sign(13, 5), Sign::Pisces);
        assert_eq!(resolve_sign(0, 0), Sign::Pisces);
        // Day overflow still lands in the start month's window
        assert_eq!(resolve_sign(3, 99), Sign::Aries);
    }

    #[test]
    fn test_id_round_trip_and_display() {
        for sign in Sign::ALL {
            assert_eq!(Sign::from_id(sign.id()), Some(sign));
        }
        assert_eq!(Sign::from_id("Aries"), None);
        assert_eq!(Sign::Sagittarius.to_string(), "Sagittarius");
    }

    #[test]
    fn test_sign_serializes_lowercase() {
        let json = serde_json::to_string(&Sign::Capricorn).unwrap();
        assert_eq!(json, "\"capricorn\"");
    }
}
