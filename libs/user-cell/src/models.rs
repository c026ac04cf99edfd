use serde::{Deserialize, Serialize};

/// A staff member or patient row. `specialization` stays blank for
/// anyone who is not a doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub specialization: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub specialization: Option<String>,
}

impl CreateUserRequest {
    /// Presence check only: absent and empty-string both count as missing.
    pub fn missing_required_fields(&self) -> bool {
        is_blank(&self.name) || is_blank(&self.email) || is_blank(&self.role)
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
