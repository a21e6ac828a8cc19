//! Login sync payloads.

use serde::{Deserialize, Serialize};

/// Identity-provider profile sent to `POST /auth/login` after sign-in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Avatar URL, when the provider supplied one.
    pub image: Option<String>,
}

/// Backend acknowledgement of a login sync.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginAck {
    pub status: String,
    pub user_id: i64,
}
