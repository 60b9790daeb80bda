//! Runtime settings for the landing page.
//!
//! Every field has a default, so the host page only has to embed the values it
//! wants to change:
//!
//! ```html
//! <script id="page-config" type="application/json">{"banner_display_ms": 8000}</script>
//! ```

use serde::{Deserialize, Serialize};

/// One scrollable section of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSection {
    pub id: String,
    pub title: String,
}

impl PageSection {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub site_title: String,
    /// How long a flash banner stays fully visible.
    pub banner_display_ms: u64,
    /// Length of the fade before the banner is removed.
    pub banner_fade_ms: u64,
    pub min_password_len: usize,
    pub login_action: String,
    pub register_action: String,
    pub pages: Vec<PageSection>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            site_title: "Medicare".to_string(),
            banner_display_ms: 5000,
            banner_fade_ms: 300,
            min_password_len: 6,
            login_action: "/login".to_string(),
            register_action: "/register".to_string(),
            pages: vec![
                PageSection::new("home", "Home"),
                PageSection::new("about", "About"),
                PageSection::new("services", "Services"),
                PageSection::new("contact", "Contact"),
            ],
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
