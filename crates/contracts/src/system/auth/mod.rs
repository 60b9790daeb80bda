//! Login and registration form payloads.
//!
//! Field names follow what the backend reads from the posted form
//! (`username`, `email`, `password`, `userType`, `adminName`).

mod validation;

pub use validation::{is_valid_email, FormError, FormKind};

use serde::{Deserialize, Serialize};

/// Role selected in a form's `userType` radio group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[default]
    #[serde(rename = "user")]
    Standard,
    #[serde(rename = "admin")]
    Admin,
}

impl UserType {
    /// Value posted by the radio input.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Standard => "user",
            UserType::Admin => "admin",
        }
    }

    /// Anything other than `"admin"` counts as a standard user.
    pub fn from_value(value: &str) -> Self {
        if value == "admin" {
            UserType::Admin
        } else {
            UserType::Standard
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserType::Admin)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
    #[serde(rename = "adminName", default)]
    pub admin_name: String,
}

impl LoginForm {
    /// Checks run in a fixed order and the first failure wins.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(FormError::MissingRequired);
        }

        if self.user_type.is_admin() && self.admin_name.trim().is_empty() {
            return Err(FormError::MissingAdminName(FormKind::Login));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
    #[serde(rename = "adminName", default)]
    pub admin_name: String,
}

impl RegisterForm {
    /// Required fields, then admin name, then email shape, then password length.
    ///
    /// Password length counts `char`s, not UTF-16 code units, so an emoji counts once.
    pub fn validate(&self, min_password_len: usize) -> Result<(), FormError> {
        let email = self.email.trim();
        let password = self.password.trim();

        if self.username.trim().is_empty() || email.is_empty() || password.is_empty() {
            return Err(FormError::MissingRequired);
        }

        if self.user_type.is_admin() && self.admin_name.trim().is_empty() {
            return Err(FormError::MissingAdminName(FormKind::Register));
        }

        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }

        if password.chars().count() < min_password_len {
            return Err(FormError::PasswordTooShort {
                min: min_password_len,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, email: &str, password: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn user_type_parses_radio_values() {
        assert_eq!(UserType::from_value("admin"), UserType::Admin);
        assert_eq!(UserType::from_value("user"), UserType::Standard);
        assert_eq!(UserType::from_value(""), UserType::Standard);
        assert_eq!(UserType::Admin.as_str(), "admin");
    }

    #[test]
    fn login_requires_password_for_every_role() {
        for user_type in [UserType::Standard, UserType::Admin] {
            let form = LoginForm {
                username: "alice".into(),
                password: "   ".into(),
                user_type,
                admin_name: "Head Nurse".into(),
            };
            assert_eq!(form.validate(), Err(FormError::MissingRequired));
        }
    }

    #[test]
    fn login_requires_username() {
        let form = LoginForm {
            username: "  ".into(),
            password: "secret".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
    }

    #[test]
    fn login_required_check_precedes_admin_name() {
        let form = LoginForm {
            username: String::new(),
            password: "secret".into(),
            user_type: UserType::Admin,
            admin_name: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
    }

    #[test]
    fn register_requires_all_fields() {
        for form in [
            register(" ", "user@example.com", "abcdef"),
            register("bob", "", "abcdef"),
            register("bob", "user@example.com", "\t"),
        ] {
            assert_eq!(form.validate(6), Err(FormError::MissingRequired));
        }
    }

    #[test]
    fn register_required_check_precedes_admin_name() {
        let form = RegisterForm {
            user_type: UserType::Admin,
            admin_name: String::new(),
            ..register("bob", "  ", "abcdef")
        };
        assert_eq!(form.validate(6), Err(FormError::MissingRequired));
    }

    #[test]
    fn admin_login_needs_admin_name() {
        let mut form = LoginForm {
            username: "alice".into(),
            password: "secret".into(),
            user_type: UserType::Admin,
            admin_name: " ".into(),
        };
        assert_eq!(
            form.validate(),
            Err(FormError::MissingAdminName(FormKind::Login))
        );

        form.admin_name = "Dr. Alice".into();
        assert_eq!(form.validate(), Ok(()));

        form.user_type = UserType::Standard;
        form.admin_name.clear();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn register_rejects_malformed_email() {
        let form = register("bob", "not-an-email", "abcdef");
        assert_eq!(form.validate(6), Err(FormError::InvalidEmail));
    }

    #[test]
    fn register_accepts_minimal_valid_input() {
        let form = register("bob", "user@example.com", "abcdef");
        assert_eq!(form.validate(6), Ok(()));
    }

    #[test]
    fn register_checks_password_length_after_email() {
        assert_eq!(
            register("bob", "user@example.com", "abcde").validate(6),
            Err(FormError::PasswordTooShort { min: 6 })
        );
        // Email failure wins even though the password is also too short.
        assert_eq!(
            register("bob", "bad", "abc").validate(6),
            Err(FormError::InvalidEmail)
        );
    }

    #[test]
    fn register_checks_admin_name_before_email() {
        let form = RegisterForm {
            user_type: UserType::Admin,
            ..register("bob", "bad", "abc")
        };
        assert_eq!(
            form.validate(6),
            Err(FormError::MissingAdminName(FormKind::Register))
        );
    }

    #[test]
    fn register_trims_password_before_measuring() {
        let form = register("bob", "user@example.com", "  abcd  ");
        assert_eq!(form.validate(6), Err(FormError::PasswordTooShort { min: 6 }));
    }

    #[test]
    fn register_counts_password_chars() {
        let form = register("bob", "user@example.com", &"\u{1F600}".repeat(3));
        assert_eq!(form.validate(6), Err(FormError::PasswordTooShort { min: 6 }));
        let form = register("bob", "user@example.com", &"\u{1F600}".repeat(6));
        assert_eq!(form.validate(6), Ok(()));
    }

    #[test]
    fn form_uses_backend_field_names() {
        let form: LoginForm = serde_json::from_str(
            r#"{"username":"a","password":"b","userType":"admin","adminName":"c"}"#,
        )
        .unwrap();
        assert_eq!(form.user_type, UserType::Admin);
        assert_eq!(form.admin_name, "c");
    }
}
