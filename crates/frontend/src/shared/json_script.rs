//! Reading JSON embedded by the backend in `<script type="application/json">` tags.

use contracts::shared::flash::FlashMessage;
use contracts::shared::page_config::PageConfig;

pub const CONFIG_ELEMENT_ID: &str = "page-config";
pub const FLASH_ELEMENT_ID: &str = "flash-messages";

/// Text content of the element, `None` if it is absent.
fn script_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}

/// `PageConfig` from `#page-config`, or defaults.
pub fn load_page_config() -> PageConfig {
    let Some(text) = script_text(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    PageConfig::from_json(&text).unwrap_or_else(|e| {
        log::warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
        PageConfig::default()
    })
}

/// Banners the backend queued for this load.
pub fn load_flash_messages() -> Vec<FlashMessage> {
    let Some(text) = script_text(FLASH_ELEMENT_ID) else {
        return Vec::new();
    };
    FlashMessage::list_from_json(&text).unwrap_or_else(|e| {
        log::warn!("ignoring malformed #{}: {}", FLASH_ELEMENT_ID, e);
        Vec::new()
    })
}
