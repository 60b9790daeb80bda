pub mod flash;
pub mod page_config;
