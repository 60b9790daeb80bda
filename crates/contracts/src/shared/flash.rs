use serde::{Deserialize, Serialize};

/// Flash categories the backend emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
    #[default]
    #[serde(other)]
    Info,
}

impl FlashCategory {
    /// Banner modifier class, e.g. `alert-success`.
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashCategory::Success => "alert-success",
            FlashCategory::Error => "alert-error",
            FlashCategory::Info => "alert-info",
        }
    }
}

/// One transient status banner shown after a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    #[serde(default)]
    pub category: FlashCategory,
    pub message: String,
}

impl FlashMessage {
    pub fn new(category: FlashCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// Parse the list the backend renders into `#flash-messages`.
    pub fn list_from_json(json: &str) -> Result<Vec<FlashMessage>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
