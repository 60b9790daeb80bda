pub mod flash_banners;
pub mod ui;
