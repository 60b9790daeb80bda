pub mod input;
pub mod radio;

pub use input::Input;
pub use radio::RoleRadio;
