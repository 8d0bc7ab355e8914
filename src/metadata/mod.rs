//! Page metadata module
//!
//! Describes everything that ends up in the document head: title, description,
//! icon links, auxiliary meta tags and the Open Graph preview record.
//!
//! The record is built once at startup (either the built-in registry or the
//! `[metadata]` table of the configuration file) and is read-only afterwards.

mod registry;

use serde::Deserialize;

/// Metadata record rendered into the document head
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    /// Icon links, emitted in order
    #[serde(default)]
    pub icons: Vec<Icon>,
    /// Auxiliary `<meta name=... content=...>` entries
    #[serde(default)]
    pub meta: Vec<MetaTag>,
    /// Social preview record; no `og:*` tag is emitted when absent
    #[serde(default)]
    pub open_graph: Option<OpenGraph>,
}

/// Icon link (`<link rel=... href=...>`)
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Icon {
    pub rel: String,
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    pub href: String,
}

/// Plain named meta entry
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// Open Graph record
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    /// `og:type` (e.g. `website`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Canonical URL
    pub url: String,
    #[serde(default)]
    pub images: Vec<OpenGraphImage>,
    pub site_name: String,
    pub locale: String,
}

/// Open Graph image
///
/// Only `url` is rendered; the remaining fields describe the asset.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OpenGraphImage {
    pub url: String,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Icon {
    /// Icon link with only `rel` and `href`
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            sizes: None,
            mime_type: None,
            href: href.into(),
        }
    }

    #[must_use]
    pub fn with_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl Metadata {
    /// Minimal record with no icons, no meta entries and no Open Graph
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icons: Vec::new(),
            meta: Vec::new(),
            open_graph: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_builder() {
        let icon = Icon::new("icon", "/f.png")
            .with_sizes("32x32")
            .with_type("image/png");
        assert_eq!(icon.rel, "icon");
        assert_eq!(icon.sizes.as_deref(), Some("32x32"));
        assert_eq!(icon.mime_type.as_deref(), Some("image/png"));
        assert_eq!(icon.href, "/f.png");
    }

    #[test]
    fn test_minimal_record_is_empty() {
        let meta = Metadata::new("T", "D");
        assert!(meta.icons.is_empty());
        assert!(meta.meta.is_empty());
        assert!(meta.open_graph.is_none());
    }

    #[test]
    fn test_deserialize_optional_fields() {
        let json = r#"{
            "title": "T",
            "description": "D",
            "icons": [{ "rel": "manifest", "href": "/site.webmanifest" }]
        }"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.icons, vec![Icon::new("manifest", "/site.webmanifest")]);
        assert!(meta.meta.is_empty());
        assert!(meta.open_graph.is_none());
    }

    #[test]
    fn test_deserialize_type_fields() {
        let json = r#"{
            "title": "T",
            "description": "D",
            "icons": [{ "rel": "icon", "type": "image/png", "sizes": "16x16", "href": "/i.png" }],
            "open_graph": {
                "title": "OG",
                "description": "OGD",
                "type": "website",
                "url": "https://example.com",
                "images": [{ "url": "https://example.com/a.jpg", "type": "image/jpeg", "width": 1200, "height": 630 }],
                "site_name": "Site",
                "locale": "fr_FR"
            }
        }"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.icons[0].mime_type.as_deref(), Some("image/png"));
        let og = meta.open_graph.as_ref().unwrap();
        assert_eq!(og.kind, "website");
        assert_eq!(og.images[0].width, Some(1200));
    }
}
