//! Contact route handlers.
//!
//! Validation is local and synchronous; a valid submission is logged and
//! acknowledged, never forwarded to a remote system.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::site::SiteChrome;
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub site: SiteChrome,
    pub form: ContactForm,
    pub error: Option<&'static str>,
    pub submitted: bool,
}

/// Display the contact page.
pub async fn page(State(_state): State<AppState>) -> ContactTemplate {
    ContactTemplate {
        site: SiteChrome::default(),
        form: ContactForm::default(),
        error: None,
        submitted: false,
    }
}

/// Handle a contact form submission.
///
/// # Errors
///
/// Infallible in practice; returns `Result` for handler uniformity.
#[instrument(skip(_state, form), fields(email = %form.email))]
pub async fn submit(
    State(_state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<ContactTemplate> {
    if let Err(error) = validate(&form) {
        return Ok(ContactTemplate {
            site: SiteChrome::default(),
            form,
            error: Some(error),
            submitted: false,
        });
    }

    // Acknowledged and logged; no message leaves this process
    tracing::info!(
        name = %form.name.trim(),
        email = %form.email.trim(),
        subject = %form.subject.trim(),
        "Contact message received"
    );

    Ok(ContactTemplate {
        site: SiteChrome::default(),
        form: ContactForm::default(),
        error: None,
        submitted: true,
    })
}

/// Check the form, returning the first failing rule.
fn validate(form: &ContactForm) -> std::result::Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err("Name is required");
    }
    if form.email.trim().is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(form.email.trim()) {
        return Err("Please enter a valid email address");
    }
    if form.message.trim().is_empty() {
        return Err("Message is required");
    }
    Ok(())
}

/// Basic email validation.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.') && !domain.contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate(&form("Ada", "ada@example.com", "Hello")).is_ok());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        assert_eq!(
            validate(&form("", "", "")),
            Err("Name is required")
        );
        assert_eq!(
            validate(&form("Ada", "", "Hello")),
            Err("Email is required")
        );
        assert_eq!(
            validate(&form("Ada", "not-an-email", "Hello")),
            Err("Please enter a valid email address")
        );
        assert_eq!(
            validate(&form("Ada", "ada@example.com", "   ")),
            Err("Message is required")
        );
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name+tag@domain.co.uk"));

        assert!(!is_valid_email("no-at-symbol"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
    }
}
