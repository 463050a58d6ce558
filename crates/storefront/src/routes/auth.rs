//! Authentication route handlers.
//!
//! Login and registration render real forms but only simulate submission
//! through [`crate::services::auth::SimulatedVerifier`]; no session or
//! credential is ever issued. Registration is a two-step flow: personal
//! details first, then password setup gated on a strength score.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::services::auth::{
    CredentialVerifier, MIN_PASSWORD_STRENGTH, Registration, password_strength, strength_label,
};
use crate::site::SiteChrome;
use crate::state::AppState;

use super::contact::is_valid_email;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data, shared by both steps.
///
/// Step 1 submits the personal fields; step 2 re-submits them as hidden
/// inputs alongside the password fields.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default = "first_step")]
    pub step: u8,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    /// Checkbox; present as "on" when ticked.
    #[serde(default)]
    pub agree_terms: Option<String>,
}

const fn first_step() -> u8 {
    1
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub site: SiteChrome,
    pub error: Option<&'static str>,
    pub email: String,
}

/// Register page template, rendering whichever step is active.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub site: SiteChrome,
    pub step: u8,
    pub error: Option<&'static str>,
    pub form: RegisterForm,
    /// Strength label for the submitted password, shown on step 2 re-renders.
    pub strength: &'static str,
}

/// Registration success page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register_success.html")]
pub struct RegisterSuccessTemplate {
    pub site: SiteChrome,
    pub email: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
pub async fn login_page(State(_state): State<AppState>) -> LoginTemplate {
    LoginTemplate {
        site: SiteChrome::default(),
        error: None,
        email: String::new(),
    }
}

/// Handle a login submission against the simulated verifier.
///
/// # Errors
///
/// Infallible in practice; returns `Result` for handler uniformity.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Ok(LoginTemplate {
            site: SiteChrome::default(),
            error: Some("Email and password are required"),
            email: form.email,
        }
        .into_response());
    }

    match state.auth().verify(form.email.trim(), &form.password).await {
        Ok(()) => Ok(Redirect::to("/").into_response()),
        Err(_) => Ok(LoginTemplate {
            site: SiteChrome::default(),
            error: Some("Invalid email or password"),
            email: form.email,
        }
        .into_response()),
    }
}

/// Display the registration page at step 1.
pub async fn register_page(State(_state): State<AppState>) -> RegisterTemplate {
    RegisterTemplate {
        site: SiteChrome::default(),
        step: 1,
        error: None,
        form: RegisterForm::default(),
        strength: "",
    }
}

/// Handle a registration submission for either step.
///
/// # Errors
///
/// Infallible in practice; returns `Result` for handler uniformity.
#[instrument(skip(state, form), fields(email = %form.email, step = form.step))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let strength = strength_label(password_strength(&form.password));

    if form.step == 1 {
        return Ok(match validate_step_one(&form) {
            // Step 1 accepted: advance to the password step
            Ok(()) => RegisterTemplate {
                site: SiteChrome::default(),
                step: 2,
                error: None,
                form,
                strength: "",
            },
            Err(error) => RegisterTemplate {
                site: SiteChrome::default(),
                step: 1,
                error: Some(error),
                form,
                strength: "",
            },
        }
        .into_response());
    }

    if let Err(error) = validate_step_two(&form) {
        return Ok(RegisterTemplate {
            site: SiteChrome::default(),
            step: 2,
            error: Some(error),
            form,
            strength,
        }
        .into_response());
    }

    let registration = Registration {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.trim().to_lowercase(),
        phone: form.phone.trim().to_string(),
    };

    match state.auth().register(&registration).await {
        Ok(()) => Ok(RegisterSuccessTemplate {
            site: SiteChrome::default(),
            email: registration.email,
        }
        .into_response()),
        Err(_) => Ok(RegisterTemplate {
            site: SiteChrome::default(),
            step: 2,
            error: Some("Something went wrong. Please try again."),
            form,
            strength,
        }
        .into_response()),
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Check the personal-details step, returning the first failing rule.
fn validate_step_one(form: &RegisterForm) -> std::result::Result<(), &'static str> {
    if form.first_name.trim().is_empty() {
        return Err("First name is required");
    }
    if form.last_name.trim().is_empty() {
        return Err("Last name is required");
    }
    if form.email.trim().is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(form.email.trim()) {
        return Err("Please enter a valid email address");
    }
    if form.phone.trim().is_empty() {
        return Err("Phone number is required");
    }
    Ok(())
}

/// Check the password step, returning the first failing rule.
fn validate_step_two(form: &RegisterForm) -> std::result::Result<(), &'static str> {
    if form.password.is_empty() {
        return Err("Password is required");
    }
    if form.password.len() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if password_strength(&form.password) < MIN_PASSWORD_STRENGTH {
        return Err("Please choose a stronger password");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match");
    }
    if form.agree_terms.is_none() {
        return Err("You must agree to the Terms and Conditions");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_one_form() -> RegisterForm {
        RegisterForm {
            step: 1,
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: "ada@example.com".to_string(),
            phone: "08012345678".to_string(),
            ..RegisterForm::default()
        }
    }

    fn step_two_form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            step: 2,
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            agree_terms: Some("on".to_string()),
            ..step_one_form()
        }
    }

    #[test]
    fn test_step_one_accepts_complete_details() {
        assert!(validate_step_one(&step_one_form()).is_ok());
    }

    #[test]
    fn test_step_one_rejects_missing_fields_in_order() {
        let mut form = step_one_form();
        form.first_name = String::new();
        assert_eq!(validate_step_one(&form), Err("First name is required"));

        let mut form = step_one_form();
        form.email = "not-an-email".to_string();
        assert_eq!(
            validate_step_one(&form),
            Err("Please enter a valid email address")
        );

        let mut form = step_one_form();
        form.phone = "  ".to_string();
        assert_eq!(validate_step_one(&form), Err("Phone number is required"));
    }

    #[test]
    fn test_step_two_accepts_strong_matching_password() {
        assert!(validate_step_two(&step_two_form("Abc12345!", "Abc12345!")).is_ok());
    }

    #[test]
    fn test_weak_password_blocks_step_two() {
        // "abcdefgh" scores 2 (length + lowercase): below the gate
        assert_eq!(
            validate_step_two(&step_two_form("abcdefgh", "abcdefgh")),
            Err("Please choose a stronger password")
        );
    }

    #[test]
    fn test_short_password_blocked_before_strength() {
        assert_eq!(
            validate_step_two(&step_two_form("Ab1!", "Ab1!")),
            Err("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_mismatched_confirmation_blocked() {
        assert_eq!(
            validate_step_two(&step_two_form("Abc12345!", "Abc12345?")),
            Err("Passwords do not match")
        );
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let mut form = step_two_form("Abc12345!", "Abc12345!");
        form.agree_terms = None;
        assert_eq!(
            validate_step_two(&form),
            Err("You must agree to the Terms and Conditions")
        );
    }
}
