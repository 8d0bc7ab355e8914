//! Document rendering module
//!
//! Turns a metadata record and a body fragment into a full HTML document.
//! Rendering is a single pass with no failure modes: absent optional metadata
//! simply contributes no elements.

pub mod head;

pub use head::head_elements;

use crate::metadata::Metadata;

/// Language of the document root
pub const DOCUMENT_LANG: &str = "fr";

/// Render the whole document
///
/// `body` is inserted verbatim inside `<body>`.
pub fn render_document(meta: &Metadata, body: &str) -> String {
    let elements = head_elements(meta);

    let mut html = String::with_capacity(256 + elements.len() * 96 + body.len());
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"");
    html.push_str(DOCUMENT_LANG);
    html.push_str("\">\n");
    html.push_str("<head>\n");
    for element in &elements {
        element.write_to(&mut html);
        html.push('\n');
    }
    html.push_str("</head>\n");
    html.push_str("<body>");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Icon, MetaTag};

    fn head_of(html: &str) -> &str {
        let start = html.find("<head>").unwrap();
        let end = html.find("</head>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_minimal_example() {
        let mut meta = Metadata::new("T", "D");
        meta.icons.push(
            Icon::new("icon", "/f.png")
                .with_type("image/png")
                .with_sizes("32x32"),
        );

        let html = render_document(&meta, "");
        let head = head_of(&html);

        assert_eq!(head.matches("<title>T</title>").count(), 1);
        assert_eq!(
            head.matches(r#"<meta name="description" content="D">"#).count(),
            1
        );
        assert_eq!(head.matches("<link ").count(), 1);
        assert!(head.contains(r#"href="/f.png""#));
        // only the description meta
        assert_eq!(head.matches("<meta ").count(), 1);
        assert!(!head.contains("og:"));
    }

    #[test]
    fn test_document_root_and_body() {
        let html = render_document(&Metadata::new("T", "D"), "<main>Bonjour & bienvenue</main>");
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"fr\">"));
        // body is not escaped
        assert!(html.contains("<body><main>Bonjour & bienvenue</main></body>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_head_order() {
        let mut meta = Metadata::portfolio();
        meta.meta = vec![MetaTag::new("theme-color", "#ffffff")];
        let html = render_document(&meta, "");

        let title = html.find("<title>").unwrap();
        let description = html.find(r#"name="description""#).unwrap();
        let link = html.find("<link ").unwrap();
        let theme = html.find(r#"name="theme-color""#).unwrap();
        let og = html.find("og:title").unwrap();
        assert!(title < description && description < link && link < theme && theme < og);
    }

    #[test]
    fn test_portfolio_document() {
        let html = render_document(&Metadata::portfolio(), "");
        let head = head_of(&html);
        assert_eq!(head.matches("<link ").count(), 4);
        assert_eq!(head.matches(r#"property="og:"#).count(), 7);
        // description + two auxiliary entries
        assert_eq!(head.matches("<meta name=").count(), 3);
        assert!(head.contains(r#"<meta property="og:locale" content="fr_FR">"#));
    }

    #[test]
    fn test_idempotent() {
        let meta = Metadata::portfolio();
        let body = "<p>hello</p>";
        assert_eq!(render_document(&meta, body), render_document(&meta, body));
    }
}
