//! Content store query client.
//!
//! # Architecture
//!
//! - The hosted content store is the source of truth - NO local sync, direct
//!   API calls
//! - Queries are GROQ strings with named `$parameters`, sent to the project's
//!   query endpoint; responses arrive as a `{"result": ...}` JSON envelope
//!   shaped exactly by the query projection
//! - Every call is a fresh round trip: no cache, no retry
//!
//! # Example
//!
//! ```rust,ignore
//! use franemm_storefront::content::ContentClient;
//!
//! let client = ContentClient::new(&config.content);
//!
//! let product = client.get_product_by_slug(&slug).await?;
//! let posts = client.get_posts().await?;
//! ```

pub mod portable_text;
pub mod queries;
pub mod types;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, instrument};

use franemm_core::Slug;

use crate::config::ContentStoreConfig;
use types::{CategoryDocument, PostDocument, ProductDocument};

/// Errors that can occur when querying the content store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the query or returned an error payload.
    #[error("content store error: {0}")]
    Api(String),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Query resolved to nothing.
    #[error("not found: {0}")]
    NotFound(String),
}

/// JSON envelope around every query response.
#[derive(Debug, serde::Deserialize)]
struct QueryResponse<T> {
    result: Option<T>,
}

/// Error payload returned by the store on failed queries.
#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    description: String,
}

// =============================================================================
// ContentClient
// =============================================================================

/// Client for the content store's query API.
///
/// Provides typed access to products, categories, and blog posts. Cheap to
/// clone; the underlying HTTP client and endpoint are shared.
#[derive(Clone)]
pub struct ContentClient {
    inner: Arc<ContentClientInner>,
}

struct ContentClientInner {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl ContentClient {
    /// Create a new content store client.
    #[must_use]
    pub fn new(config: &ContentStoreConfig) -> Self {
        Self {
            inner: Arc::new(ContentClientInner {
                client: reqwest::Client::new(),
                endpoint: config.query_endpoint(),
                api_token: config.token().map(str::to_owned),
            }),
        }
    }

    /// Execute a query and deserialize the `result` field.
    ///
    /// Returns `Ok(None)` when the query resolved to `null` (e.g. a `[0]`
    /// selector with no match).
    async fn fetch<T: DeserializeOwned>(
        &self,
        query: String,
        params: &[(&str, serde_json::Value)],
    ) -> Result<Option<T>, ContentError> {
        // Parameters travel as `$name=<json-encoded value>` beside the query
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(params.len() + 1);
        pairs.push(("query".to_string(), query));
        for (name, value) in params {
            pairs.push((format!("${name}"), value.to_string()));
        }

        let mut request = self.inner.client.get(&self.inner.endpoint).query(&pairs);
        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        // Get the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Content store returned non-success status"
            );
            let description = serde_json::from_str::<ErrorResponse>(&response_text)
                .map_or_else(|_| format!("HTTP {status}"), |e| e.error.description);
            return Err(ContentError::Api(description));
        }

        let envelope: QueryResponse<T> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse content store response"
                );
                return Err(ContentError::Parse(e));
            }
        };

        Ok(envelope.result)
    }

    /// Execute a list query; `null` results count as an empty list.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        query: String,
        params: &[(&str, serde_json::Value)],
    ) -> Result<Vec<T>, ContentError> {
        Ok(self.fetch(query, params).await?.unwrap_or_default())
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<ProductDocument>, ContentError> {
        self.fetch_list(queries::all_products(), &[]).await
    }

    /// Get a product by its slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_product_by_slug(&self, slug: &Slug) -> Result<ProductDocument, ContentError> {
        let product: ProductDocument = self
            .fetch(queries::product_by_slug(), &[("slug", json!(slug.as_str()))])
            .await?
            .ok_or_else(|| ContentError::NotFound(format!("Product not found: {slug}")))?;

        // Each fetch is tagged with the slug it was issued for; a document
        // that answers for a different slug is discarded, not rendered.
        if product.slug != *slug {
            debug!(got = %product.slug, "Discarding response for mismatched slug");
            return Err(ContentError::NotFound(format!("Product not found: {slug}")));
        }

        Ok(product)
    }

    /// Get all products in a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(category = %category_slug))]
    pub async fn get_products_by_category(
        &self,
        category_slug: &Slug,
    ) -> Result<Vec<ProductDocument>, ContentError> {
        self.fetch_list(
            queries::products_by_category(),
            &[("categorySlug", json!(category_slug.as_str()))],
        )
        .await
    }

    /// Get up to four products sharing a category, excluding one slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(category = %category_slug, exclude = %exclude_slug))]
    pub async fn get_related_products(
        &self,
        category_slug: &Slug,
        exclude_slug: &Slug,
    ) -> Result<Vec<ProductDocument>, ContentError> {
        self.fetch_list(
            queries::related_products(),
            &[
                ("categorySlug", json!(category_slug.as_str())),
                ("slug", json!(exclude_slug.as_str())),
            ],
        )
        .await
    }

    /// Get all featured products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_featured_products(&self) -> Result<Vec<ProductDocument>, ContentError> {
        self.fetch_list(queries::featured_products(), &[]).await
    }

    /// Get products filtered by availability.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products_by_availability(
        &self,
        is_available: bool,
    ) -> Result<Vec<ProductDocument>, ContentError> {
        self.fetch_list(
            queries::products_by_availability(),
            &[("isAvailable", json!(is_available))],
        )
        .await
    }

    // =========================================================================
    // Category Methods
    // =========================================================================

    /// Get a category by its slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the category is not found or the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_category_by_slug(&self, slug: &Slug) -> Result<CategoryDocument, ContentError> {
        let category: CategoryDocument = self
            .fetch(queries::category_by_slug(), &[("slug", json!(slug.as_str()))])
            .await?
            .ok_or_else(|| ContentError::NotFound(format!("Category not found: {slug}")))?;

        if category.slug != *slug {
            debug!(got = %category.slug, "Discarding response for mismatched slug");
            return Err(ContentError::NotFound(format!("Category not found: {slug}")));
        }

        Ok(category)
    }

    // =========================================================================
    // Blog Methods
    // =========================================================================

    /// Get all blog posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_posts(&self) -> Result<Vec<PostDocument>, ContentError> {
        self.fetch_list(queries::all_posts(), &[]).await
    }

    /// Get a blog post by its slug, including the rich-text body.
    ///
    /// # Errors
    ///
    /// Returns an error if the post is not found or the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_post_by_slug(&self, slug: &Slug) -> Result<PostDocument, ContentError> {
        let post: PostDocument = self
            .fetch(queries::post_by_slug(), &[("slug", json!(slug.as_str()))])
            .await?
            .ok_or_else(|| ContentError::NotFound(format!("Blog post not found: {slug}")))?;

        if post.slug != *slug {
            debug!(got = %post.slug, "Discarding response for mismatched slug");
            return Err(ContentError::NotFound(format!("Blog post not found: {slug}")));
        }

        Ok(post)
    }

    /// Get the three newest posts other than the given slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(exclude = %exclude_slug))]
    pub async fn get_recent_posts(
        &self,
        exclude_slug: &Slug,
    ) -> Result<Vec<PostDocument>, ContentError> {
        self.fetch_list(
            queries::recent_posts(),
            &[("slug", json!(exclude_slug.as_str()))],
        )
        .await
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Verify the store is reachable with a count query.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or rejects the query.
    pub async fn ping(&self) -> Result<(), ContentError> {
        self.fetch::<u64>(queries::ping(), &[]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_display() {
        let err = ContentError::NotFound("Product not found: soap-a".to_string());
        assert_eq!(err.to_string(), "not found: Product not found: soap-a");

        let err = ContentError::Api("query parse error".to_string());
        assert_eq!(err.to_string(), "content store error: query parse error");
    }

    #[test]
    fn test_envelope_null_result() {
        let envelope: QueryResponse<ProductDocument> =
            serde_json::from_str(r#"{"result": null, "ms": 3}"#).expect("valid envelope");
        assert!(envelope.result.is_none());
    }

    #[test]
    fn test_envelope_list_result() {
        let envelope: QueryResponse<Vec<PostDocument>> = serde_json::from_str(
            r#"{"result": [{"_id": "b1", "title": "Skin Tips", "slug": "skin-tips"}]}"#,
        )
        .expect("valid envelope");
        assert_eq!(envelope.result.map(|posts| posts.len()), Some(1));
    }

    #[test]
    fn test_error_payload_description() {
        let parsed: ErrorResponse = serde_json::from_str(
            r#"{"error": {"description": "param $slug referenced, but not provided", "type": "queryParseError"}}"#,
        )
        .expect("valid error payload");
        assert_eq!(
            parsed.error.description,
            "param $slug referenced, but not provided"
        );
    }
}
