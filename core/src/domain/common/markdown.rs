use pulldown_cmark::{Event, Options, Parser, html};

/// Renders generated Markdown to HTML. Raw HTML in the source is emitted as
/// escaped text so the output can be embedded in pages as-is.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_bold_fields() {
        let html = render_markdown("**Food:** Apple");
        assert_eq!(html, "<p><strong>Food:</strong> Apple</p>\n");
    }

    #[test]
    fn test_escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markdown(""), "");
    }
}
