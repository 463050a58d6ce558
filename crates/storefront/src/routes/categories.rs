//! Category route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::content::types::CategoryDocument;
use crate::error::{AppError, Result};
use crate::filters;
use crate::site::SiteChrome;
use crate::state::AppState;

use super::products::ProductCardView;

/// Category display data for templates.
#[derive(Clone)]
pub struct CategoryView {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<&CategoryDocument> for CategoryView {
    fn from(category: &CategoryDocument) -> Self {
        Self {
            slug: category.slug.to_string(),
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}

/// Category detail page template.
///
/// A category with zero products is a normal page with an empty state, not
/// an error.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub site: SiteChrome,
    pub category: CategoryView,
    pub products: Vec<ProductCardView>,
}

/// Display a category and its products.
///
/// # Errors
///
/// Renders the error panel if the category slug is unknown or the content
/// store is unreachable.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<CategoryShowTemplate> {
    let slug = super::parse_slug(&slug)?;
    let category = state
        .content()
        .get_category_by_slug(&slug)
        .await
        .map_err(|e| AppError::from(e).titled("Category Not Found"))?;

    let products = state.content().get_products_by_category(&slug).await?;

    Ok(CategoryShowTemplate {
        site: SiteChrome::default(),
        category: CategoryView::from(&category),
        products: products.iter().map(ProductCardView::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_view_conversion() {
        let doc: CategoryDocument = serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "name": "Kids Products",
            "slug": "kids-products",
            "description": "Gentle care for little ones"
        }))
        .expect("valid category json");

        let view = CategoryView::from(&doc);
        assert_eq!(view.name, "Kids Products");
        assert_eq!(view.slug, "kids-products");
        assert_eq!(view.description.as_deref(), Some("Gentle care for little ones"));
    }

    #[test]
    fn test_zero_products_is_a_page_not_an_error() {
        // The empty state renders from the same template as a full grid
        let template = CategoryShowTemplate {
            site: SiteChrome::default(),
            category: CategoryView {
                slug: "kids-products".to_string(),
                name: "Kids Products".to_string(),
                description: None,
            },
            products: Vec::new(),
        };
        assert!(template.products.is_empty());
        let html = template.render().expect("renders");
        assert!(html.contains("No Products Found"));
    }
}
