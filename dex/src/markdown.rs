//! Minimal markdown-to-HTML rendering for generated content
//!
//! Supports the subset the content generator emits: headings, bold,
//! italic, and bullet items. Source text is HTML-escaped before any
//! markup is applied, so generated content can never inject raw HTML.

/// Render a markdown string to HTML, one block element per input line.
pub fn to_html(markdown: &str) -> String {
    let mut html = String::with_capacity(markdown.len());

    for line in markdown.lines() {
        let line = escape(line);
        let block = if let Some(rest) = line.strip_prefix("### ") {
            format!("<h3>{}</h3>", inline(rest))
        } else if let Some(rest) = line.strip_prefix("## ") {
            format!("<h2>{}</h2>", inline(rest))
        } else if let Some(rest) = line.strip_prefix("# ") {
            format!("<h1>{}</h1>", inline(rest))
        } else if let Some(rest) = line.strip_prefix("- ") {
            format!("<li>{}</li>", inline(rest))
        } else if line.is_empty() {
            "<br>".to_string()
        } else {
            format!("<p>{}</p>", inline(&line))
        };

        if !html.is_empty() {
            html.push('\n');
        }
        html.push_str(&block);
    }

    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Apply inline markup: `**bold**` first, then `*italic*`.
fn inline(text: &str) -> String {
    let bolded = wrap_pairs(text, "**", "strong");
    wrap_pairs(&bolded, "*", "em")
}

/// Replace paired delimiters with a tag. An unmatched delimiter is left
/// as literal text.
fn wrap_pairs(text: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        let Some(end) = after.find(delim) else {
            break;
        };
        if end == 0 {
            // adjacent delimiters wrap nothing, keep them literal
            out.push_str(&rest[..start + delim.len() * 2]);
            rest = &after[delim.len()..];
            continue;
        }
        out.push_str(&rest[..start]);
        out.push_str(&format!("<{tag}>{}</{tag}>", &after[..end]));
        rest = &after[end + delim.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(to_html("# Title"), "<h1>Title</h1>");
        assert_eq!(to_html("## Sub"), "<h2>Sub</h2>");
        assert_eq!(to_html("### Deep"), "<h3>Deep</h3>");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(to_html("a **b** c"), "<p>a <strong>b</strong> c</p>");
        assert_eq!(to_html("a *b* c"), "<p>a <em>b</em> c</p>");
        assert_eq!(
            to_html("**bold** and *slanted*"),
            "<p><strong>bold</strong> and <em>slanted</em></p>"
        );
    }

    #[test]
    fn test_unmatched_delimiter_is_literal() {
        assert_eq!(to_html("2 * 3 = 6"), "<p>2 * 3 = 6</p>");
        assert_eq!(to_html("a ** b"), "<p>a ** b</p>");
    }

    #[test]
    fn test_list_items() {
        assert_eq!(
            to_html("- one\n- two"),
            "<li>one</li>\n<li>two</li>"
        );
    }

    #[test]
    fn test_paragraphs_and_breaks() {
        assert_eq!(
            to_html("first\n\nsecond"),
            "<p>first</p>\n<br>\n<p>second</p>"
        );
    }

    #[test]
    fn test_escapes_html() {
        assert_eq!(
            to_html("<script>alert(1)</script>"),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
        assert_eq!(to_html("fish & chips"), "<p>fish &amp; chips</p>");
    }

    #[test]
    fn test_mixed_document() {
        let doc = "# Story\n\nA **brave** bulbasaur.\n- seed\n- vine";
        let html = to_html(doc);
        assert_eq!(
            html,
            "<h1>Story</h1>\n<br>\n<p>A <strong>brave</strong> bulbasaur.</p>\n<li>seed</li>\n<li>vine</li>"
        );
    }
}
