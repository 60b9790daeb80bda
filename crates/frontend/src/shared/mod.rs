pub mod browser_host;
pub mod components;
pub mod json_script;
pub mod modal_frame;
