use thiserror::Error;

/// Which form a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    fn noun(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Register => "registration",
        }
    }
}

/// A failed pre-submit check. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Admin name is required for admin {}.", .0.noun())]
    MissingAdminName(FormKind),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },
}

/// `local@domain.tld`: no whitespace, exactly one `@`, something on both sides,
/// and a dot inside the domain with at least one character around it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
