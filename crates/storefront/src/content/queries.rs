//! GROQ query definitions for the content store.
//!
//! Queries are parameterized with `$name` placeholders; values are passed
//! alongside the query as JSON-encoded request parameters, never spliced into
//! the query text. Slugs are flattened in every projection so wire types
//! deserialize without nested slug objects.

/// Fields projected for product cards (listings, buckets, related strips).
///
/// `coalesce` covers documents created before the main image field was
/// renamed from `image` to `mainImage`.
const PRODUCT_CARD_FIELDS: &str = r#"
    _id,
    title,
    "slug": slug.current,
    price,
    availability,
    featured,
    "imageUrl": coalesce(mainImage.asset->url, image.asset->url)
"#;

/// Fields projected for blog post cards.
const POST_CARD_FIELDS: &str = r#"
    _id,
    title,
    "slug": slug.current,
    "coverImageUrl": coverImage.asset->url,
    publishedAt,
    categories
"#;

/// Fetch all products.
#[must_use]
pub fn all_products() -> String {
    format!("*[_type == \"product\"]{{{PRODUCT_CARD_FIELDS}}}")
}

/// Fetch a single product by `$slug`, with the full detail projection.
#[must_use]
pub fn product_by_slug() -> String {
    format!(
        r#"*[_type == "product" && slug.current == $slug][0]{{{PRODUCT_CARD_FIELDS},
    quantity,
    description,
    "additionalImages": additionalImages[]{{"url": asset->url}},
    category->{{name, "slug": slug.current}}
}}"#
    )
}

/// Fetch products whose category matches `$categorySlug`.
#[must_use]
pub fn products_by_category() -> String {
    format!(
        "*[_type == \"product\" && category->slug.current == $categorySlug]{{{PRODUCT_CARD_FIELDS}}}"
    )
}

/// Fetch up to four products sharing `$categorySlug`, excluding `$slug`.
#[must_use]
pub fn related_products() -> String {
    format!(
        "*[_type == \"product\" && category->slug.current == $categorySlug && slug.current != $slug][0...4]{{{PRODUCT_CARD_FIELDS}}}"
    )
}

/// Fetch featured products.
#[must_use]
pub fn featured_products() -> String {
    format!("*[_type == \"product\" && featured == true]{{{PRODUCT_CARD_FIELDS}}}")
}

/// Fetch products filtered by the `$isAvailable` flag.
#[must_use]
pub fn products_by_availability() -> String {
    format!(
        "*[_type == \"product\" && availability == $isAvailable]{{{PRODUCT_CARD_FIELDS}}}"
    )
}

/// Fetch a single category by `$slug`.
#[must_use]
pub fn category_by_slug() -> String {
    r#"*[_type == "category" && slug.current == $slug][0]{
    _id,
    name,
    "slug": slug.current,
    description
}"#
    .to_string()
}

/// Fetch all blog posts, newest first.
#[must_use]
pub fn all_posts() -> String {
    format!("*[_type == \"blog\"] | order(publishedAt desc){{{POST_CARD_FIELDS}}}")
}

/// Fetch a single blog post by `$slug`, including the rich-text body.
#[must_use]
pub fn post_by_slug() -> String {
    format!(
        r#"*[_type == "blog" && slug.current == $slug][0]{{{POST_CARD_FIELDS},
    body
}}"#
    )
}

/// Fetch the three newest posts other than `$slug`.
#[must_use]
pub fn recent_posts() -> String {
    format!(
        "*[_type == \"blog\" && slug.current != $slug] | order(publishedAt desc)[0...3]{{{POST_CARD_FIELDS}}}"
    )
}

/// Cheap readiness probe: count products without fetching any.
#[must_use]
pub fn ping() -> String {
    "count(*[_type == \"product\"])".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_queries_use_first_selector() {
        assert!(product_by_slug().contains("[0]"));
        assert!(category_by_slug().contains("[0]"));
        assert!(post_by_slug().contains("[0]"));
    }

    #[test]
    fn test_queries_are_parameterized_not_spliced() {
        assert!(product_by_slug().contains("slug.current == $slug"));
        assert!(products_by_category().contains("category->slug.current == $categorySlug"));
        assert!(products_by_availability().contains("availability == $isAvailable"));
        assert!(recent_posts().contains("slug.current != $slug"));
    }

    #[test]
    fn test_posts_ordered_newest_first() {
        assert!(all_posts().contains("| order(publishedAt desc)"));
        assert!(recent_posts().contains("| order(publishedAt desc)[0...3]"));
    }

    #[test]
    fn test_projections_flatten_slugs() {
        for query in [all_products(), product_by_slug(), all_posts()] {
            assert!(query.contains("\"slug\": slug.current"), "{query}");
        }
    }

    #[test]
    fn test_detail_projection_includes_gallery_and_category() {
        let query = product_by_slug();
        assert!(query.contains("additionalImages[]"));
        assert!(query.contains("category->{name, \"slug\": slug.current}"));
        assert!(query.contains("quantity"));
    }
}
