use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account record. `password` stays empty for OAuth-backed accounts and is
/// never serialized into responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub company_name: Option<String>,
    pub role: String,
    pub email: Option<String>,
}
