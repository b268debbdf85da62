//! Markdown to HTML for article previews.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render article markdown. Raw HTML in the source is shown as text and links
/// or images with a scheme other than http, https or mailto point at `#`.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_destination(&dest) {
        dest
    } else {
        CowStr::Borrowed("#")
    }
}

/// Relative destinations and the allowed schemes pass.
///
/// Browsers ignore whitespace and control characters inside a scheme, so
/// `java\tscript:` is read as `javascript:`.
fn is_safe_destination(dest: &str) -> bool {
    let cleaned: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let Some(colon) = cleaned.find(':') else {
        return true;
    };
    // A ':' after the path, query or fragment starts is not a scheme.
    if cleaned[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = &cleaned[..colon];
    SAFE_SCHEMES.iter().any(|safe| *safe == scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_lists() {
        let html = to_html("# Title\n\n- one\n- two\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_raw_html_escaped() {
        let html = to_html("Hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_javascript_link_neutralized() {
        let html = to_html("[x](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#">x</a>"##));

        let html = to_html("[x](JavaScript:alert(1)) [y](data:text/html,hi)");
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(!html.contains("data:"));
    }

    #[test]
    fn test_safe_links_kept() {
        let html =
            to_html("[a](https://example.com) [b](/guides?q=1) [c](mailto:team@example.com)");
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"href="/guides?q=1""#));
        assert!(html.contains(r#"href="mailto:team@example.com""#));
    }

    #[test]
    fn test_javascript_image_neutralized() {
        let html = to_html("![pic](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"src="#""##));
    }

    #[test]
    fn test_destination_schemes() {
        assert!(is_safe_destination("https://example.com"));
        assert!(is_safe_destination("notes/a:b"));
        assert!(is_safe_destination("#section"));
        assert!(!is_safe_destination(" java\tscript:alert(1)"));
        assert!(!is_safe_destination("vbscript:msgbox"));
    }
}
