use std::fmt;

use serde::Serialize;

use super::ValidationError;

/// Credentials for `/auth/login`.
#[derive(Clone, Default, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if self.password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        Ok(())
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(
            LoginForm::new("  ", "x").validate(),
            Err(ValidationError::EmailRequired)
        );
        assert_eq!(
            LoginForm::new("a@b.com", "").validate(),
            Err(ValidationError::PasswordRequired)
        );
        assert!(LoginForm::new(" a@b.com ", "x").validate().is_ok());
    }

    #[test]
    fn test_email_is_trimmed_and_serialized() {
        let form = LoginForm::new(" a@b.com ", "x");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "x"}));
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", LoginForm::new("a@b.com", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
