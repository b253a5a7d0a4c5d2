use chrono::NaiveDate;

use crate::reading::types::ReadingType;
use crate::render::page;
use crate::zodiac::Sign;

/// Number of birth years offered by the year select, newest first.
const YEAR_CHOICES: i32 = 100;

/// Renders the birth-details form posting to `/horoscope`.
pub fn render_home_page(current_year: i32) -> String {
    let zodiac_icons: String = Sign::ALL
        .iter()
        .map(|s| {
            format!(
                r#"<span class="zodiac-icon" title="{}">{}</span>"#,
                s.display_name(),
                s.info().symbol
            )
        })
        .collect();

    let months: String = (1..=12u32)
        .filter_map(|m| NaiveDate::from_ymd_opt(2000, m, 1).map(|d| (m, d)))
        .map(|(m, d)| format!(r#"<option value="{m}">{}</option>"#, d.format("%B")))
        .collect();

    let days: String = (1..=31)
        .map(|d| format!(r#"<option value="{d}">{d}</option>"#))
        .collect();

    let years: String = (0..YEAR_CHOICES)
        .map(|offset| current_year - offset)
        .map(|y| format!(r#"<option value="{y}">{y}</option>"#))
        .collect();

    let reading_types: String = ReadingType::ALL
        .iter()
        .map(|t| format!(r#"<option value="{}">{}</option>"#, t.id(), t.form_label()))
        .collect::<String>()
        .replace('&', "&amp;");

    let content = format!(
        r#"        <header>
            <div class="logo">✨🌙✨</div>
            <h1>Celestial Horoscope</h1>
            <p class="tagline">Discover What the Stars Have Written for You</p>
        </header>
        <div class="zodiac-wheel">{zodiac_icons}</div>
        <div class="form-card">
            <h2 class="form-title">Enter Your Birth Details</h2>
            <form action="/horoscope" method="post">
                <div class="form-group">
                    <label for="name">Your Name</label>
                    <input type="text" id="name" name="name" placeholder="Enter your name" required>
                </div>
                <div class="form-group">
                    <label>Date of Birth</label>
                    <div class="date-row">
                        <select name="month" required><option value="">Month</option>{months}</select>
                        <select name="day" required><option value="">Day</option>{days}</select>
                        <select name="year" required><option value="">Year</option>{years}</select>
                    </div>
                </div>
                <div class="form-group">
                    <label for="reading_type">Type of Reading</label>
                    <select id="reading_type" name="reading_type">{reading_types}</select>
                </div>
                <button type="submit">Reveal My Horoscope ✨</button>
            </form>
        </div>"#
    );

    page("Celestial Horoscope · Your Daily Star Guide", "", &content)
}
