//! Account route handlers.
//!
//! `/profile` and `/orders` are unauthenticated stubs: with no auth service
//! wired up there is no account to show, so both screens explain that and
//! point at the login page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::filters;
use crate::site::SiteChrome;
use crate::state::AppState;

/// Profile stub template.
#[derive(Template, WebTemplate)]
#[template(path = "account/profile.html")]
pub struct ProfileTemplate {
    pub site: SiteChrome,
}

/// Orders stub template.
#[derive(Template, WebTemplate)]
#[template(path = "account/orders.html")]
pub struct OrdersTemplate {
    pub site: SiteChrome,
}

/// Display the profile stub.
pub async fn profile(State(_state): State<AppState>) -> ProfileTemplate {
    ProfileTemplate {
        site: SiteChrome::default(),
    }
}

/// Display the order-history stub.
pub async fn orders(State(_state): State<AppState>) -> OrdersTemplate {
    OrdersTemplate {
        site: SiteChrome::default(),
    }
}
