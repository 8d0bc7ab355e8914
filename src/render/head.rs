//! Document head elements
//!
//! The head is built as an ordered list of typed elements before being
//! written out, so each section of the metadata record maps to zero or more
//! elements through its own total function.

use crate::metadata::{Icon, MetaTag, Metadata, OpenGraph};
use std::fmt::Write;

/// Single element of the document head
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadElement<'a> {
    /// `<title>`
    Title(&'a str),
    /// `<meta name=... content=...>`
    NamedMeta { name: &'a str, content: &'a str },
    /// `<link rel=... sizes=... type=... href=...>`
    Link(&'a Icon),
    /// `<meta property=... content=...>`
    PropertyMeta {
        property: &'static str,
        content: &'a str,
    },
}

impl HeadElement<'_> {
    /// Append the element's markup (one line) to `out`
    pub fn write_to(&self, out: &mut String) {
        match self {
            Self::Title(text) => {
                let _ = write!(out, "<title>{}</title>", escape(text));
            }
            Self::NamedMeta { name, content } => {
                let _ = write!(
                    out,
                    r#"<meta name="{}" content="{}">"#,
                    escape(name),
                    escape(content)
                );
            }
            Self::Link(icon) => {
                let _ = write!(out, r#"<link rel="{}""#, escape(&icon.rel));
                if let Some(sizes) = &icon.sizes {
                    let _ = write!(out, r#" sizes="{}""#, escape(sizes));
                }
                if let Some(mime_type) = &icon.mime_type {
                    let _ = write!(out, r#" type="{}""#, escape(mime_type));
                }
                let _ = write!(out, r#" href="{}">"#, escape(&icon.href));
            }
            Self::PropertyMeta { property, content } => {
                let _ = write!(
                    out,
                    r#"<meta property="{}" content="{}">"#,
                    property,
                    escape(content)
                );
            }
        }
    }

    /// Whether this is an `og:*` property tag
    #[cfg(test)]
    pub fn is_open_graph(&self) -> bool {
        matches!(self, Self::PropertyMeta { property, .. } if property.starts_with("og:"))
    }
}

/// Build the head of the document, in output order
pub fn head_elements(meta: &Metadata) -> Vec<HeadElement<'_>> {
    let mut elements = vec![
        HeadElement::Title(&meta.title),
        HeadElement::NamedMeta {
            name: "description",
            content: &meta.description,
        },
    ];
    elements.extend(icon_links(&meta.icons));
    elements.extend(named_metas(&meta.meta));
    elements.extend(meta.open_graph.iter().flat_map(open_graph_tags));
    elements
}

fn icon_links(icons: &[Icon]) -> impl Iterator<Item = HeadElement<'_>> {
    icons.iter().map(HeadElement::Link)
}

fn named_metas(entries: &[MetaTag]) -> impl Iterator<Item = HeadElement<'_>> {
    entries.iter().map(|m| HeadElement::NamedMeta {
        name: &m.name,
        content: &m.content,
    })
}

/// Six scalar `og:*` tags followed by one `og:image` per image
fn open_graph_tags(og: &OpenGraph) -> impl Iterator<Item = HeadElement<'_>> {
    let scalars = [
        ("og:title", og.title.as_str()),
        ("og:description", og.description.as_str()),
        ("og:type", og.kind.as_str()),
        ("og:url", og.url.as_str()),
        ("og:site_name", og.site_name.as_str()),
        ("og:locale", og.locale.as_str()),
    ];
    scalars
        .into_iter()
        .chain(og.images.iter().map(|image| ("og:image", image.url.as_str())))
        .map(|(property, content)| HeadElement::PropertyMeta { property, content })
}

/// Escape text for use inside element content or a double-quoted attribute
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::OpenGraphImage;

    fn open_graph(images: usize) -> OpenGraph {
        OpenGraph {
            title: "OG".to_string(),
            description: "OGD".to_string(),
            kind: "website".to_string(),
            url: "https://example.com".to_string(),
            images: (0..images)
                .map(|i| OpenGraphImage {
                    url: format!("https://example.com/{i}.jpg"),
                    mime_type: Some("image/jpeg".to_string()),
                    width: Some(1200),
                    height: Some(630),
                })
                .collect(),
            site_name: "Site".to_string(),
            locale: "fr_FR".to_string(),
        }
    }

    fn render(element: &HeadElement<'_>) -> String {
        let mut out = String::new();
        element.write_to(&mut out);
        out
    }

    #[test]
    fn test_minimal_head() {
        let meta = Metadata::new("T", "D");
        let elements = head_elements(&meta);
        assert_eq!(
            elements,
            vec![
                HeadElement::Title("T"),
                HeadElement::NamedMeta {
                    name: "description",
                    content: "D"
                },
            ]
        );
    }

    #[test]
    fn test_one_link_per_icon() {
        let mut meta = Metadata::new("T", "D");
        for n in 0..4 {
            let count = head_elements(&meta)
                .iter()
                .filter(|e| matches!(e, HeadElement::Link(_)))
                .count();
            assert_eq!(count, n);
            meta.icons.push(Icon::new("icon", format!("/{n}.png")));
        }
    }

    #[test]
    fn test_open_graph_count() {
        for k in 0..3 {
            let mut meta = Metadata::new("T", "D");
            meta.open_graph = Some(open_graph(k));
            let og: Vec<_> = head_elements(&meta)
                .into_iter()
                .filter(HeadElement::is_open_graph)
                .collect();
            assert_eq!(og.len(), 6 + k);
            let images = og
                .iter()
                .filter(|e| matches!(e, HeadElement::PropertyMeta { property: "og:image", .. }))
                .count();
            assert_eq!(images, k);
        }
    }

    #[test]
    fn test_open_graph_order() {
        let mut meta = Metadata::new("T", "D");
        meta.open_graph = Some(open_graph(1));
        let properties: Vec<&str> = head_elements(&meta)
            .iter()
            .filter_map(|e| match e {
                HeadElement::PropertyMeta { property, .. } => Some(*property),
                _ => None,
            })
            .collect();
        assert_eq!(
            properties,
            [
                "og:title",
                "og:description",
                "og:type",
                "og:url",
                "og:site_name",
                "og:locale",
                "og:image"
            ]
        );
    }

    #[test]
    fn test_image_tag_carries_only_url() {
        let og = open_graph(1);
        let image = open_graph_tags(&og).last().unwrap();
        assert_eq!(
            render(&image),
            r#"<meta property="og:image" content="https://example.com/0.jpg">"#
        );
    }

    #[test]
    fn test_link_optional_attributes() {
        let bare = Icon::new("manifest", "/site.webmanifest");
        assert_eq!(
            render(&HeadElement::Link(&bare)),
            r#"<link rel="manifest" href="/site.webmanifest">"#
        );

        let full = Icon::new("icon", "/f.png")
            .with_sizes("32x32")
            .with_type("image/png");
        assert_eq!(
            render(&HeadElement::Link(&full)),
            r#"<link rel="icon" sizes="32x32" type="image/png" href="/f.png">"#
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a & "b" <c>"#), "a &amp; &quot;b&quot; &lt;c&gt;");
        let title = HeadElement::Title("Tom & Jerry");
        assert_eq!(render(&title), "<title>Tom &amp; Jerry</title>");
    }
}
