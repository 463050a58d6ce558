//! Wire types for content-store query results.
//!
//! Each struct mirrors one query projection from [`super::queries`]. Slugs are
//! flattened to plain strings in the projections (`"slug": slug.current`) so
//! the documents deserialize straight into [`Slug`] values.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use franemm_core::{CategoryId, PostId, Price, ProductId, Slug};

const fn default_true() -> bool {
    true
}

// =============================================================================
// Catalog Types
// =============================================================================

/// A dereferenced category on a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    /// Display name.
    pub name: String,
    /// URL key of the category page.
    pub slug: Slug,
}

/// An entry of a product's additional image array.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    /// Resolved asset URL.
    pub url: Option<String>,
}

/// A product document as projected by the card and detail queries.
///
/// Card queries leave `quantity`, `description`, `additional_images`, and
/// `category` at their defaults; the detail query fills everything in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub title: String,
    pub slug: Slug,
    pub price: Price,
    #[serde(default = "default_true")]
    pub availability: bool,
    #[serde(default)]
    pub featured: bool,
    /// Units in stock; the store enforces >= 0.
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
    /// Resolved main image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Up to two extra gallery images.
    #[serde(default)]
    pub additional_images: Vec<ImageRef>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl ProductDocument {
    /// All gallery image URLs: the main image followed by the additional
    /// images, skipping unresolved assets.
    #[must_use]
    pub fn gallery_urls(&self) -> Vec<String> {
        self.image_url
            .iter()
            .cloned()
            .chain(
                self.additional_images
                    .iter()
                    .filter_map(|img| img.url.clone()),
            )
            .collect()
    }
}

/// A category document.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDocument {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// Blog Types
// =============================================================================

/// A blog post document.
///
/// `body` is only projected by the detail query. A missing `published_at`
/// means the post is treated as recently published, not given a synthetic
/// date.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub body: Vec<Block>,
}

// =============================================================================
// Rich-Text Types
// =============================================================================

/// One node of a rich-text body.
///
/// Text blocks have `_type == "block"`; anything else (embedded images and
/// other custom nodes) is skipped by the renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "_type")]
    pub kind: String,
    /// Visual style: `normal`, `h1`..`h4`, `blockquote`.
    #[serde(default)]
    pub style: Option<String>,
    /// `bullet` or `number` when the block is a list item.
    #[serde(default)]
    pub list_item: Option<String>,
    /// Link definitions referenced from span marks by `_key`.
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
    #[serde(default)]
    pub children: Vec<Span>,
}

/// An annotation definition attached to a block (currently only links).
#[derive(Debug, Clone, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// A run of text inside a block.
///
/// `marks` holds decorator names (`strong`, `em`) and mark-def keys.
#[derive(Debug, Clone, Deserialize)]
pub struct Span {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_card_defaults() {
        // Card projections omit quantity, description, and category entirely.
        let doc: ProductDocument = serde_json::from_str(
            r#"{
                "_id": "p1",
                "title": "Baby Soap",
                "slug": "baby-soap",
                "price": 1500,
                "availability": false,
                "featured": true,
                "imageUrl": "https://cdn.sanity.io/images/p1.png"
            }"#,
        )
        .expect("valid card json");

        assert_eq!(doc.slug.as_str(), "baby-soap");
        assert!(!doc.availability);
        assert!(doc.featured);
        assert_eq!(doc.quantity, 0);
        assert!(doc.category.is_none());
        assert_eq!(doc.price.to_string(), "₦1,500");
    }

    #[test]
    fn test_availability_defaults_to_true() {
        let doc: ProductDocument = serde_json::from_str(
            r#"{"_id": "p1", "title": "Soap", "slug": "soap", "price": 100}"#,
        )
        .expect("valid json");
        assert!(doc.availability);
        assert!(doc.image_url.is_none());
    }

    #[test]
    fn test_gallery_urls_skip_unresolved() {
        let doc: ProductDocument = serde_json::from_str(
            r#"{
                "_id": "p1",
                "title": "Soap",
                "slug": "soap",
                "price": 100,
                "imageUrl": "https://cdn.sanity.io/images/main.png",
                "additionalImages": [
                    {"url": "https://cdn.sanity.io/images/extra.png"},
                    {"url": null}
                ]
            }"#,
        )
        .expect("valid json");

        assert_eq!(
            doc.gallery_urls(),
            vec![
                "https://cdn.sanity.io/images/main.png".to_string(),
                "https://cdn.sanity.io/images/extra.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_post_without_timestamp_or_body() {
        let doc: PostDocument = serde_json::from_str(
            r#"{"_id": "b1", "title": "Hair Guide", "slug": "hair-guide"}"#,
        )
        .expect("valid json");

        assert!(doc.published_at.is_none());
        assert!(doc.body.is_empty());
        assert!(doc.categories.is_empty());
    }

    #[test]
    fn test_rich_text_block_parses() {
        let block: Block = serde_json::from_str(
            r#"{
                "_type": "block",
                "style": "normal",
                "listItem": "bullet",
                "markDefs": [{"_key": "k1", "_type": "link", "href": "https://example.com"}],
                "children": [{"_type": "span", "text": "hello", "marks": ["strong", "k1"]}]
            }"#,
        )
        .expect("valid block json");

        assert_eq!(block.list_item.as_deref(), Some("bullet"));
        assert_eq!(block.mark_defs.first().map(|d| d.key.as_str()), Some("k1"));
        assert_eq!(
            block.children.first().map(|s| s.marks.clone()),
            Some(vec!["strong".to_string(), "k1".to_string()])
        );
    }
}
