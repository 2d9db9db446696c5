use serde::{Deserialize, Serialize};

/// Minimal descriptor of the signed-in user, persisted as JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub name: String,
    pub role: String,
    pub token: String,
}
