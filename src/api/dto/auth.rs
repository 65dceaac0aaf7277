//! DTOs for registration and login.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials submitted to `/register` and `/login`.
///
/// `Debug` is implemented by hand so the password never ends up in logs.
#[derive(Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email(message = "field email is not a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "field password is required"))]
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Response carrying a freshly issued bearer token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_credentials() {
        assert!(credentials("admin@example.com", "pw").validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_email() {
        for email in ["", "admin", "admin@", "@example.com"] {
            let errors = credentials(email, "pw").validate().unwrap_err();
            assert!(errors.field_errors().contains_key("email"), "{email:?}");
        }
    }

    #[test]
    fn test_rejects_empty_password() {
        let errors = credentials("admin@example.com", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_debug_hides_password() {
        let printed = format!("{:?}", credentials("admin@example.com", "hunter2"));
        assert!(!printed.contains("hunter2"));
    }
}
