use crate::reading::handlers::Horoscope;
use crate::reading::types::{reading_title, section_icon, section_title};
use crate::render::{escape_html, page};
use crate::zodiac::signs::{element_colors, sign_info_or_default};

/// Renders the result page for one horoscope.
pub fn render_reading_page(horoscope: &Horoscope) -> String {
    let sign = horoscope.sign;
    let info = sign_info_or_default(sign.id());
    let colors = element_colors(info.element.name());
    let name = escape_html(&horoscope.name);
    let reading = &horoscope.reading;

    let sections_html: String = reading
        .ordered_sections()
        .into_iter()
        .map(|(id, text)| {
            format!(
                r#"            <div class="reading-section">
                <h3>{} {}</h3>
                <p class="reading-text">{}</p>
            </div>
"#,
                section_icon(id),
                escape_html(&section_title(id)),
                escape_html(&text.as_text())
            )
        })
        .collect();

    let element_style = format!(
        ".sign-symbol {{ color: {primary}; text-shadow: 0 0 30px {glow}; }}\n\
         .sign-name {{ color: {primary}; }}\n\
         .element-badge {{ background: {glow}; color: {primary}; }}",
        primary = colors.primary,
        glow = colors.glow,
    );

    let content = format!(
        r#"        <div class="reading-card">
            <div class="sign-header">
                <span class="sign-symbol">{symbol}</span>
                <h1 class="sign-name">{sign_name}</h1>
                <div class="sign-meta">
                    <span>{constellation} {dates}</span>
                    <span class="element-badge">{element} Sign</span>
                </div>
            </div>
            <p class="greeting">Welcome, {name}. The cosmos has a message for you...</p>
            <h2 class="reading-title">{title}</h2>
{sections_html}
            <div class="cosmic-numbers">
                <div class="cosmic-number"><div class="label">Lucky Number</div><div class="value">{lucky_number}</div></div>
                <div class="cosmic-number"><div class="label">Lucky Color</div><div class="value">{lucky_color}</div></div>
                <div class="cosmic-number"><div class="label">Cosmic Energy</div><div class="value">{energy_level}%</div></div>
            </div>
            <a href="/" class="back-link">← Get Another Reading</a>
        </div>"#,
        symbol = info.symbol,
        sign_name = sign.display_name(),
        constellation = info.constellation,
        dates = info.dates,
        element = info.element.name(),
        title = escape_html(reading_title(&horoscope.reading_type)),
        lucky_number = escape_html(&reading.lucky_number.as_text()),
        lucky_color = escape_html(&reading.lucky_color.as_text()),
        energy_level = escape_html(&reading.energy_level.as_text()),
    );

    let title = format!(
        "{}'s {} Horoscope · Celestial Horoscope",
        horoscope.name,
        sign.display_name()
    );

    page(&title, &element_style, &content)
}
