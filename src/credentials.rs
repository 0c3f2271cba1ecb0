use std::env;
use std::fmt;

pub const EMAIL_VAR: &str = "MINT_EMAIL";
pub const PASSWORD_VAR: &str = "MINT_PASSWORD";

/// Login for the aggregation service. Values are passed through unchecked.
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self {
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(env::var(EMAIL_VAR).ok(), env::var(PASSWORD_VAR).ok())
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        env::set_var(EMAIL_VAR, "saver@example.com");
        env::set_var(PASSWORD_VAR, "hunter2");
        let credentials = Credentials::from_env();
        env::remove_var(EMAIL_VAR);
        env::remove_var(PASSWORD_VAR);

        assert_eq!(credentials.email(), "saver@example.com");
        assert_eq!(credentials.password(), "hunter2");
    }

    #[test]
    fn test_absent_values_are_empty() {
        let credentials = Credentials::new(None, None);
        assert_eq!(credentials.email(), "");
        assert_eq!(credentials.password(), "");
    }

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::new(Some("saver@example.com".to_string()), Some("hunter2".to_string()));
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("saver@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
