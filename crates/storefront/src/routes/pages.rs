//! Static page route handlers: about page and the 404 fallback.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::filters;
use crate::site::SiteChrome;
use crate::state::AppState;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub site: SiteChrome,
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub site: SiteChrome,
}

/// Display the about page.
pub async fn about(State(_state): State<AppState>) -> AboutTemplate {
    AboutTemplate {
        site: SiteChrome::default(),
    }
}

/// Catch-all fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            site: SiteChrome::default(),
        },
    )
}
