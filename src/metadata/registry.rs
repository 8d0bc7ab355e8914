// Built-in metadata registry
// The site's own head declarations, used when no [metadata] table is configured

use super::{Icon, MetaTag, Metadata, OpenGraph, OpenGraphImage};

const FAVICON_DIR: &str = "/src/assets/favicon";

const DESCRIPTION: &str = "Développeur Frontend, passionné du design et du développement web. \
Je suis expert en création de sites web, dédié à répondre aux exigences spécifiques de chaque client.";

const SITE_NAME: &str = "Pierre SOURICE - Développeur Frontend";

impl Metadata {
    /// The portfolio's metadata record
    pub fn portfolio() -> Self {
        Self {
            icons: vec![
                Icon::new("icon", format!("{FAVICON_DIR}/favicon-32x32.png"))
                    .with_type("image/png")
                    .with_sizes("32x32"),
                Icon::new("icon", format!("{FAVICON_DIR}/favicon-16x16.png"))
                    .with_type("image/png")
                    .with_sizes("16x16"),
                Icon::new("apple-touch-icon", format!("{FAVICON_DIR}/apple-touch-icon.png"))
                    .with_sizes("180x180"),
                Icon::new("manifest", format!("{FAVICON_DIR}/site.webmanifest")),
            ],
            meta: vec![
                MetaTag::new("msapplication-TileColor", "#da532c"),
                MetaTag::new("theme-color", "#ffffff"),
            ],
            open_graph: Some(OpenGraph {
                title: SITE_NAME.to_string(),
                description: DESCRIPTION.to_string(),
                kind: "website".to_string(),
                url: "https://pierresourice.fr".to_string(),
                images: vec![OpenGraphImage {
                    url: "https://res.cloudinary.com/duqrhths8/image/upload/v1721987131/Logo_hq2fas.ico"
                        .to_string(),
                    mime_type: Some("image/jpeg".to_string()),
                    width: Some(1200),
                    height: Some(630),
                }],
                site_name: SITE_NAME.to_string(),
                locale: "fr_FR".to_string(),
            }),
            ..Self::new("Site personnel de Pierre Sourice", DESCRIPTION)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_icons_in_order() {
        let meta = Metadata::portfolio();
        let rels: Vec<&str> = meta.icons.iter().map(|i| i.rel.as_str()).collect();
        assert_eq!(rels, ["icon", "icon", "apple-touch-icon", "manifest"]);
        // apple and manifest entries carry no type
        assert!(meta.icons[2].mime_type.is_none());
        assert!(meta.icons[3].sizes.is_none());
        assert!(meta
            .icons
            .iter()
            .all(|i| i.href.starts_with("/src/assets/favicon/")));
    }

    #[test]
    fn test_portfolio_open_graph() {
        let meta = Metadata::portfolio();
        let og = meta.open_graph.as_ref().unwrap();
        assert_eq!(og.kind, "website");
        assert_eq!(og.locale, "fr_FR");
        assert_eq!(og.url, "https://pierresourice.fr");
        assert_eq!(og.images.len(), 1);
        assert_eq!(og.description, meta.description);
    }

    #[test]
    fn test_portfolio_meta_entries() {
        let meta = Metadata::portfolio();
        assert_eq!(
            meta.meta,
            vec![
                MetaTag::new("msapplication-TileColor", "#da532c"),
                MetaTag::new("theme-color", "#ffffff"),
            ]
        );
    }
}
