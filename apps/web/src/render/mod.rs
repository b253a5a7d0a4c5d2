//! HTML rendering for the two pages. Plain string assembly around a shared
//! shell and stylesheet; every user-supplied or model-supplied value goes
//! through `escape_html`.

pub mod home;
pub mod reading;

pub use home::render_home_page;
pub use reading::render_reading_page;

const STYLES: &str = include_str!("styles.css");

const FAVICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>⭐</text></svg>";

const FOOTER: &str = "⭐ Powered by AI & Ancient Astrological Wisdom ⭐";

/// Wraps page content in the document shell. `extra_style` is appended after
/// the base stylesheet.
fn page(title: &str, extra_style: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" href="{FAVICON}">
    <style>
{STYLES}
{extra_style}
    </style>
</head>
<body>
    <div class="starfield"></div>
    <div class="stars"></div>
    <div class="container">
{content}
        <footer>{footer}</footer>
    </div>
</body>
</html>
"#,
        title = escape_html(title),
        footer = escape_html(FOOTER),
    )
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Ada ✨"), "Ada ✨");
    }

    #[test]
    fn test_page_shell_includes_styles_and_footer() {
        let html = page("A & B", "", "<p>hi</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(".cosmic-numbers"));
        assert!(html.contains("Powered by AI &amp; Ancient Astrological Wisdom"));
        assert!(html.contains("<p>hi</p>"));
    }
}
