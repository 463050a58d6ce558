//! Blog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::content::portable_text;
use crate::content::types::PostDocument;
use crate::error::{AppError, Result};
use crate::filters;
use crate::search::{self, ALL_CATEGORIES_TOKEN};
use crate::site::SiteChrome;
use crate::state::AppState;

/// Label shown for posts without a publish timestamp.
const UNDATED_LABEL: &str = "Recently Published";

/// Filter parameters for the blog listing.
#[derive(Debug, Deserialize)]
pub struct BlogQuery {
    /// Free-text search over post titles.
    pub q: Option<String>,
    /// Active category chip.
    pub category: Option<String>,
}

// =============================================================================
// Views
// =============================================================================

/// Post display data for cards and the sidebar.
#[derive(Clone)]
pub struct PostCardView {
    pub slug: String,
    pub title: String,
    pub cover_image_url: Option<String>,
    /// Pre-formatted, e.g. `March 05, 2024`, or the undated fallback.
    pub date_label: String,
}

impl From<&PostDocument> for PostCardView {
    fn from(post: &PostDocument) -> Self {
        Self {
            slug: post.slug.to_string(),
            title: post.title.clone(),
            cover_image_url: post.cover_image_url.clone(),
            date_label: format_published_at(post.published_at.as_ref()),
        }
    }
}

/// Post display data for the detail page.
#[derive(Clone)]
pub struct PostDetailView {
    pub title: String,
    pub cover_image_url: Option<String>,
    pub date_label: String,
    /// Rendered rich-text body.
    pub body_html: String,
}

impl From<&PostDocument> for PostDetailView {
    fn from(post: &PostDocument) -> Self {
        Self {
            title: post.title.clone(),
            cover_image_url: post.cover_image_url.clone(),
            date_label: format_published_at(post.published_at.as_ref()),
            body_html: portable_text::render(&post.body),
        }
    }
}

/// Render a publish timestamp, falling back to the fixed undated label.
///
/// The fallback is a label, never a synthetic date: undated posts must not
/// pretend to a publication day they don't have.
fn format_published_at(published_at: Option<&DateTime<Utc>>) -> String {
    published_at.map_or_else(
        || UNDATED_LABEL.to_string(),
        |dt| dt.format("%B %d, %Y").to_string(),
    )
}

// =============================================================================
// Templates
// =============================================================================

/// Blog index page template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogIndexTemplate {
    pub site: SiteChrome,
    pub posts: Vec<PostCardView>,
    /// Current search text, echoed into the search input.
    pub query: String,
    pub active_category: String,
    /// Category chips: "all" plus every category present in the collection.
    pub categories: Vec<String>,
    /// Set when the filtered listing is empty.
    pub empty_message: Option<&'static str>,
}

/// Blog post detail template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/show.html")]
pub struct BlogShowTemplate {
    pub site: SiteChrome,
    pub post: PostDetailView,
    pub recent_posts: Vec<PostCardView>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the blog listing, narrowed by the active search and category.
///
/// The whole collection is fetched and filtered in memory on every request;
/// typing in the search box never triggers a content-store query of its own.
///
/// # Errors
///
/// Renders the error panel if the content store is unreachable.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<BlogQuery>,
) -> Result<BlogIndexTemplate> {
    let posts = state.content().get_posts().await?;

    let query = params.q.unwrap_or_default();
    let active_category = params
        .category
        .unwrap_or_else(|| ALL_CATEGORIES_TOKEN.to_string());

    let filtered = search::filter_posts(&posts, &query, &active_category);
    let empty_message = search::empty_reason(posts.len(), filtered.len(), &query, &active_category)
        .map(search::EmptyReason::message);

    let mut categories: Vec<String> = posts
        .iter()
        .flat_map(|p| p.categories.iter().cloned())
        .collect();
    categories.sort();
    categories.dedup();
    categories.insert(0, ALL_CATEGORIES_TOKEN.to_string());

    Ok(BlogIndexTemplate {
        site: SiteChrome::default(),
        posts: filtered.into_iter().map(PostCardView::from).collect(),
        query,
        active_category,
        categories,
        empty_message,
    })
}

/// Display a single blog post.
///
/// # Errors
///
/// Renders the error panel (linking back to the blog) if the slug is unknown
/// or the content store is unreachable.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<BlogShowTemplate> {
    let slug = super::parse_slug(&slug)?;
    let post = state
        .content()
        .get_post_by_slug(&slug)
        .await
        .map_err(|e| {
            AppError::from(e)
                .titled("Blog Post Not Found")
                .return_to("/blog", "Back to Blog")
        })?;

    // The sidebar is decoration; losing it should not take down the post
    let recent_posts = state
        .content()
        .get_recent_posts(&slug)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to fetch recent posts: {e}");
            Vec::new()
        });

    Ok(BlogShowTemplate {
        site: SiteChrome::default(),
        post: PostDetailView::from(&post),
        recent_posts: recent_posts.iter().map(PostCardView::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_dated_post_renders_full_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).single().expect("valid date");
        assert_eq!(format_published_at(Some(&dt)), "March 05, 2024");
    }

    #[test]
    fn test_undated_post_renders_fallback_label() {
        assert_eq!(format_published_at(None), "Recently Published");
    }

    #[test]
    fn test_card_view_uses_fallback_for_undated() {
        let post: PostDocument = serde_json::from_value(serde_json::json!({
            "_id": "b1",
            "title": "Hair Guide",
            "slug": "hair-guide"
        }))
        .expect("valid post json");

        let card = PostCardView::from(&post);
        assert_eq!(card.date_label, "Recently Published");
    }

    #[test]
    fn test_detail_view_renders_body() {
        let post: PostDocument = serde_json::from_value(serde_json::json!({
            "_id": "b1",
            "title": "Skin Tips",
            "slug": "skin-tips",
            "body": [{
                "_type": "block",
                "style": "h2",
                "children": [{"_type": "span", "text": "Cleanse first", "marks": []}]
            }]
        }))
        .expect("valid post json");

        let view = PostDetailView::from(&post);
        assert_eq!(view.body_html, "<h2>Cleanse first</h2>");
    }
}
