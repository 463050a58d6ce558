//! Unified error handling with Sentry integration.
//!
//! All route handlers return `Result<T, AppError>`. Transport failures and
//! missing documents both render the same generic error panel with a link
//! back to a safe screen; only the status code and the logged message
//! differ. Server-side failures are captured to Sentry before responding.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::content::ContentError;
use crate::filters;
use crate::site::SiteChrome;

/// The safe screen an error panel links back to.
#[derive(Debug, Clone, Copy)]
pub struct ReturnTo {
    pub href: &'static str,
    pub label: &'static str,
}

impl Default for ReturnTo {
    fn default() -> Self {
        Self {
            href: "/",
            label: "Back to Home",
        }
    }
}

/// What went wrong.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Content store operation failed.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application-level error type for the storefront.
///
/// Carries the failure itself plus the panel heading and return link used
/// when rendering it, so a handler can say
/// `AppError::from(err).titled("Product Not Found")` and keep its route's
/// context on the panel.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct AppError {
    #[source]
    kind: ErrorKind,
    heading: Option<&'static str>,
    return_to: ReturnTo,
}

impl AppError {
    /// A not-found error for a named thing (e.g. an unknown route).
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        ErrorKind::NotFound(what.into()).into()
    }

    /// An internal error with a log-only message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        ErrorKind::Internal(message.into()).into()
    }

    /// Override the panel heading.
    #[must_use]
    pub const fn titled(mut self, heading: &'static str) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Override the panel's return link.
    #[must_use]
    pub const fn return_to(mut self, href: &'static str, label: &'static str) -> Self {
        self.return_to = ReturnTo { href, label };
        self
    }

    const fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NotFound(_) | ErrorKind::Content(ContentError::NotFound(_))
        )
    }

    fn status(&self) -> StatusCode {
        if self.is_not_found() {
            return StatusCode::NOT_FOUND;
        }
        match self.kind {
            ErrorKind::Content(_) => StatusCode::BAD_GATEWAY,
            ErrorKind::BadRequest(_) => StatusCode::BAD_REQUEST,
            // NotFound is handled above
            ErrorKind::NotFound(_) | ErrorKind::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn heading(&self) -> &'static str {
        self.heading.unwrap_or(if self.is_not_found() {
            "Page Not Found"
        } else {
            "Something Went Wrong"
        })
    }

    /// The user-safe panel message. Internal details stay in the logs.
    fn message(&self) -> &'static str {
        match &self.kind {
            _ if self.is_not_found() => {
                "We couldn't find what you were looking for. It may have been moved or removed."
            }
            ErrorKind::Content(_) => {
                "We couldn't load this page right now. Please try again in a moment."
            }
            ErrorKind::BadRequest(_) => "The request could not be understood.",
            ErrorKind::NotFound(_) | ErrorKind::Internal(_) => {
                "An unexpected error occurred. Please try again."
            }
        }
    }
}

impl From<ErrorKind> for AppError {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            heading: None,
            return_to: ReturnTo::default(),
        }
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        ErrorKind::Content(err).into()
    }
}

/// The shared error panel.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorPageTemplate {
    pub site: SiteChrome,
    pub heading: &'static str,
    pub message: &'static str,
    pub return_href: &'static str,
    pub return_label: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture failures that indicate something broke server-side; a
        // missing slug is a normal outcome and stays out of Sentry
        if matches!(
            self.kind,
            ErrorKind::Internal(_)
                | ErrorKind::Content(
                    ContentError::Http(_) | ContentError::Api(_) | ContentError::Parse(_)
                )
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request failed");
        }

        let panel = ErrorPageTemplate {
            site: SiteChrome::default(),
            heading: self.heading(),
            message: self.message(),
            return_href: self.return_to.href,
            return_label: self.return_to.label,
        };

        (self.status(), panel).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status_and_heading() {
        let err = AppError::from(ContentError::NotFound("Product not found: soap-a".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.heading(), "Page Not Found");
    }

    #[test]
    fn test_transport_failure_is_bad_gateway_with_same_panel_shape() {
        let err = AppError::from(ContentError::Api("upstream 500".into()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        // Different message text, same generic panel
        assert_eq!(err.heading(), "Something Went Wrong");
        assert!(!err.message().contains("upstream 500"));
    }

    #[test]
    fn test_builders_set_panel_context() {
        let err = AppError::from(ContentError::NotFound("post".into()))
            .titled("Blog Post Not Found")
            .return_to("/blog", "Back to Blog");
        assert_eq!(err.heading(), "Blog Post Not Found");
        assert_eq!(err.return_to.href, "/blog");
        assert_eq!(err.return_to.label, "Back to Blog");
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = AppError::internal("category slug table corrupt");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("corrupt"));
    }

    #[test]
    fn test_display_preserves_source() {
        let err = AppError::from(ContentError::NotFound("Category not found: soaps".into()));
        assert_eq!(err.to_string(), "Content error: not found: Category not found: soaps");
    }
}
