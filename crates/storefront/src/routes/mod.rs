//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page (hero carousel + category shelves)
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (pings the content store)
//!
//! # Catalog
//! GET  /product/{slug}          - Product detail
//! POST /product/{slug}/cart     - Add to cart (logged only)
//! POST /product/{slug}/wishlist - Add to wishlist (logged only)
//! GET  /category/{slug}         - Category listing
//!
//! # Blog
//! GET  /blog                    - Blog listing (?q= search, ?category= chip)
//! GET  /blog/{slug}             - Blog post detail
//!
//! # Pages
//! GET  /about                   - About page
//! GET  /contact                 - Contact page
//! POST /contact                 - Contact form submission (local validation)
//!
//! # Auth (simulated)
//! GET  /login                   - Login page
//! POST /login                   - Login action
//! GET  /register                - Registration page (step 1)
//! POST /register                - Registration step validation / creation
//!
//! # Account (stubs)
//! GET  /profile                 - Profile stub
//! GET  /orders                  - Order history stub
//!
//! *                             - 404 page
//! ```

pub mod account;
pub mod auth;
pub mod blog;
pub mod categories;
pub mod contact;
pub mod home;
pub mod pages;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use franemm_core::Slug;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Parse a route path segment into a [`Slug`].
///
/// A malformed slug can never address a document, so it renders the same
/// not-found panel an unknown slug would.
pub(crate) fn parse_slug(raw: &str) -> Result<Slug> {
    Slug::parse(raw).map_err(|e| {
        tracing::debug!(slug = raw, "Rejected malformed slug: {e}");
        AppError::not_found(format!("malformed slug: {raw}"))
    })
}

/// Create the blog routes router.
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::index))
        .route("/{slug}", get(blog::show))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .route("/product/{slug}", get(products::show))
        .route("/product/{slug}/cart", post(products::add_to_cart))
        .route("/product/{slug}/wishlist", post(products::add_to_wishlist))
        .route("/category/{slug}", get(categories::show))
        // Blog
        .nest("/blog", blog_routes())
        // Pages
        .route("/about", get(pages::about))
        .route("/contact", get(contact::page).post(contact::submit))
        // Auth (simulated)
        .merge(auth_routes())
        // Account stubs
        .route("/profile", get(account::profile))
        .route("/orders", get(account::orders))
        // Catch-all 404
        .fallback(pages::not_found)
}
