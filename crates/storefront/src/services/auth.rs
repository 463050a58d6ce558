//! Credential verification seam.
//!
//! Authentication is owned by an external service that this storefront does
//! not ship. The [`CredentialVerifier`] trait is the seam a real client would
//! fill in; [`SimulatedVerifier`] stands in for it with a fixed network-like
//! delay and one demo credential pair. Nothing here issues sessions, cookies,
//! or tokens.
//!
//! Password-strength scoring lives here too since the registration screen
//! gates on it before anything would reach an auth service.

use std::time::Duration;

use thiserror::Error;
use tracing::instrument;

/// Minimum strength score a registration password must reach.
pub const MIN_PASSWORD_STRENGTH: u8 = 3;

/// Errors that can occur when verifying or registering credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email/password pair was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// A submitted registration, already validated by the form layer.
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// The auth-service seam.
pub trait CredentialVerifier {
    /// Check an email/password pair.
    fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), AuthError>> + Send;

    /// Create an account.
    fn register(&self, registration: &Registration)
    -> impl Future<Output = Result<(), AuthError>> + Send;
}

/// Stand-in verifier: sleeps like a network call, accepts one demo pair,
/// and records registrations in the log only.
#[derive(Debug, Clone)]
pub struct SimulatedVerifier {
    latency: Duration,
    demo_email: &'static str,
    demo_password: &'static str,
}

impl Default for SimulatedVerifier {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1500),
            demo_email: "test@example.com",
            demo_password: "password",
        }
    }
}

impl SimulatedVerifier {
    /// A verifier with no artificial latency, for tests.
    #[cfg(test)]
    fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl CredentialVerifier for SimulatedVerifier {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn verify(&self, email: &str, password: &str) -> Result<(), AuthError> {
        tokio::time::sleep(self.latency).await;

        if email.eq_ignore_ascii_case(self.demo_email) && password == self.demo_password {
            tracing::info!("Simulated sign-in accepted");
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    #[instrument(skip(self, registration), fields(email = %registration.email))]
    async fn register(&self, registration: &Registration) -> Result<(), AuthError> {
        tokio::time::sleep(self.latency).await;

        // Logged only; no account exists anywhere afterwards
        tracing::info!(
            first_name = %registration.first_name,
            last_name = %registration.last_name,
            "Simulated account creation"
        );
        Ok(())
    }
}

// =============================================================================
// Password Strength
// =============================================================================

/// Score a password 0-5: one point each for length >= 8, an uppercase
/// letter, a lowercase letter, a digit, and a symbol.
#[must_use]
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;

    if password.len() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

/// Human label for a strength score.
#[must_use]
pub const fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "",
        1 | 2 => "Weak",
        3 | 4 => "Medium",
        _ => "Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_only_scores_one() {
        assert_eq!(password_strength("abc"), 1);
    }

    #[test]
    fn test_all_criteria_scores_five() {
        assert_eq!(password_strength("Abc12345!"), 5);
    }

    #[test]
    fn test_length_without_variety() {
        // Long but lowercase-only: length + lowercase
        assert_eq!(password_strength("abcdefgh"), 2);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(password_strength(""), 0);
    }

    #[test]
    fn test_minimum_gate_sits_at_medium() {
        assert!(password_strength("Abc12345!") >= MIN_PASSWORD_STRENGTH);
        assert!(password_strength("abc") < MIN_PASSWORD_STRENGTH);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(strength_label(0), "");
        assert_eq!(strength_label(2), "Weak");
        assert_eq!(strength_label(3), "Medium");
        assert_eq!(strength_label(5), "Strong");
    }

    #[tokio::test]
    async fn test_demo_credentials_accepted() {
        let verifier = SimulatedVerifier::instant();
        assert!(verifier.verify("test@example.com", "password").await.is_ok());
        // Email comparison is case-insensitive, password is not
        assert!(verifier.verify("Test@Example.com", "password").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_credentials_rejected() {
        let verifier = SimulatedVerifier::instant();
        assert_eq!(
            verifier.verify("test@example.com", "Password").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            verifier.verify("other@example.com", "password").await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn test_registration_always_succeeds() {
        let verifier = SimulatedVerifier::instant();
        let registration = Registration {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: "ada@example.com".to_string(),
            phone: "08012345678".to_string(),
        };
        assert!(verifier.register(&registration).await.is_ok());
    }
}
