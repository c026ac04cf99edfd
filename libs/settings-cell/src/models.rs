use serde::{Deserialize, Serialize};

/// A key-value row. Append-only: keys are not unique and rows are never
/// updated or deleted through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub id: i64,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSettingRequest {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl CreateSettingRequest {
    pub fn missing_key(&self) -> bool {
        self.key.as_deref().map_or(true, str::is_empty)
    }
}
