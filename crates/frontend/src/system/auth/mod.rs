//! Login and registration dialogs.
//!
//! Both forms post natively to the backend once the pre-submit checks pass.

mod admin_field;
mod login_modal;
mod register_modal;

pub use login_modal::LoginModal;
pub use register_modal::RegisterModal;
