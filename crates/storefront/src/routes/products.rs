//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use franemm_core::{clamp_order_quantity, max_order_quantity};

use crate::content::types::{CategoryRef, ProductDocument};
use crate::error::{AppError, Result};
use crate::filters;
use crate::site::SiteChrome;
use crate::state::AppState;

/// The product-page tabs, in display order. Exactly one is active at a time.
pub const PRODUCT_TABS: &[&str] = &["description", "reviews", "shipping"];

// =============================================================================
// Views
// =============================================================================

/// Product display data for card grids.
#[derive(Clone)]
pub struct ProductCardView {
    pub slug: String,
    pub title: String,
    /// Pre-formatted, e.g. `₦12,500`.
    pub price: String,
    pub image_url: Option<String>,
    pub available: bool,
    pub featured: bool,
}

impl From<&ProductDocument> for ProductCardView {
    fn from(product: &ProductDocument) -> Self {
        Self {
            slug: product.slug.to_string(),
            title: product.title.clone(),
            price: product.price.to_string(),
            image_url: product.image_url.clone(),
            available: product.availability,
            featured: product.featured,
        }
    }
}

/// Dereferenced category link data.
#[derive(Clone)]
pub struct CategoryRefView {
    pub name: String,
    pub slug: String,
}

impl From<&CategoryRef> for CategoryRefView {
    fn from(category: &CategoryRef) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.to_string(),
        }
    }
}

/// Product display data for the detail page.
#[derive(Clone)]
pub struct ProductDetailView {
    pub slug: String,
    pub title: String,
    pub price: String,
    pub description: Option<String>,
    pub available: bool,
    pub featured: bool,
    pub quantity: u32,
    /// Stepper ceiling: min(stock, 10).
    pub max_quantity: u32,
    /// Main image first, then the additional images.
    pub images: Vec<String>,
    pub category: Option<CategoryRefView>,
}

impl From<&ProductDocument> for ProductDetailView {
    fn from(product: &ProductDocument) -> Self {
        Self {
            slug: product.slug.to_string(),
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            available: product.availability,
            featured: product.featured,
            quantity: product.quantity,
            max_quantity: max_order_quantity(product.quantity),
            images: product.gallery_urls(),
            category: product.category.as_ref().map(CategoryRefView::from),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub site: SiteChrome,
    pub product: ProductDetailView,
    pub related_products: Vec<ProductCardView>,
    /// Gallery selection; a fresh render always starts at the main image.
    pub active_image_index: usize,
    /// A fresh render always opens on the description tab.
    pub active_tab: &'static str,
    pub tabs: &'static [&'static str],
}

fn show_template(
    product: ProductDetailView,
    related_products: Vec<ProductCardView>,
) -> ProductShowTemplate {
    ProductShowTemplate {
        site: SiteChrome::default(),
        product,
        related_products,
        active_image_index: 0,
        active_tab: "description",
        tabs: PRODUCT_TABS,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the product detail page.
///
/// # Errors
///
/// Renders the error panel if the slug is unknown or the content store is
/// unreachable.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProductShowTemplate> {
    let slug = super::parse_slug(&slug)?;
    let product = state
        .content()
        .get_product_by_slug(&slug)
        .await
        .map_err(|e| AppError::from(e).titled("Product Not Found"))?;

    // The related strip is decoration; losing it should not take down the page
    let related_products = match &product.category {
        Some(category) => state
            .content()
            .get_related_products(&category.slug, &product.slug)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Failed to fetch related products: {e}");
                Vec::new()
            }),
        None => Vec::new(),
    };

    Ok(show_template(
        ProductDetailView::from(&product),
        related_products.iter().map(ProductCardView::from).collect(),
    ))
}

/// Cart form data.
#[derive(Debug, Deserialize)]
pub struct CartForm {
    pub quantity: i64,
}

/// Handle an add-to-cart submission.
///
/// There is no cart: the action is logged and the customer returns to the
/// product page. The submitted quantity still goes through the stepper
/// clamp so the log never records an impossible order.
///
/// # Errors
///
/// Renders the error panel if the product cannot be fetched.
#[instrument(skip(state))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<CartForm>,
) -> Result<Redirect> {
    let slug = super::parse_slug(&slug)?;
    let product = state
        .content()
        .get_product_by_slug(&slug)
        .await
        .map_err(|e| AppError::from(e).titled("Product Not Found"))?;

    let quantity = clamp_order_quantity(form.quantity, product.quantity);
    if product.availability && quantity > 0 {
        tracing::info!(product = %slug, quantity, "Added to cart");
    } else {
        tracing::info!(product = %slug, "Ignored add-to-cart for unavailable product");
    }

    Ok(Redirect::to(&format!("/product/{slug}")))
}

/// Handle an add-to-wishlist submission. Logged only, like the cart.
///
/// # Errors
///
/// Renders the error panel if the product cannot be fetched.
#[instrument(skip(state))]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Redirect> {
    let slug = super::parse_slug(&slug)?;
    let product = state
        .content()
        .get_product_by_slug(&slug)
        .await
        .map_err(|e| AppError::from(e).titled("Product Not Found"))?;

    tracing::info!(product = %product.slug, "Added to wishlist");

    Ok(Redirect::to(&format!("/product/{slug}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(availability: bool, quantity: u32) -> ProductDocument {
        serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "title": "Whitening Lotion",
            "slug": "whitening-lotion",
            "price": 12_500,
            "availability": availability,
            "featured": true,
            "quantity": quantity,
            "imageUrl": "https://cdn.sanity.io/images/main.png",
            "additionalImages": [{"url": "https://cdn.sanity.io/images/alt.png"}],
            "category": {"name": "Lotion & Gel", "slug": "lotion"}
        }))
        .expect("valid product json")
    }

    #[test]
    fn test_card_view_formats_price_and_badge() {
        let card = ProductCardView::from(&product(true, 5));
        assert_eq!(card.price, "₦12,500");
        assert!(card.available);

        let card = ProductCardView::from(&product(false, 0));
        assert!(!card.available);
    }

    #[test]
    fn test_detail_view_caps_stepper_at_ten() {
        let view = ProductDetailView::from(&product(true, 50));
        assert_eq!(view.max_quantity, 10);

        let view = ProductDetailView::from(&product(true, 3));
        assert_eq!(view.max_quantity, 3);
    }

    #[test]
    fn test_detail_view_collects_gallery() {
        let view = ProductDetailView::from(&product(true, 5));
        assert_eq!(view.images.len(), 2);
        assert_eq!(view.category.as_ref().map(|c| c.slug.as_str()), Some("lotion"));
    }

    #[test]
    fn test_fresh_render_resets_gallery_and_tab() {
        // Navigating to any product starts at image 0 on the description tab
        let template = show_template(ProductDetailView::from(&product(true, 5)), Vec::new());
        assert_eq!(template.active_image_index, 0);
        assert_eq!(template.active_tab, "description");
        assert_eq!(template.tabs, PRODUCT_TABS);
    }
}
