use serde::{Deserialize, Serialize};

use crate::api::AUTHORIZE_HEADER;

/// Connection settings for the homeserver that hosts the groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// base url without trailing slash, e.g. `https://matrix.example.org`
    pub homeserver_url: String,
    pub access_token: String,
    /// fully qualified id of the authenticated user
    pub user_id: String,
    #[serde(default = "default_auth_header")]
    pub auth_header: String,
}

fn default_auth_header() -> String {
    AUTHORIZE_HEADER.to_string()
}

impl ClientConfig {
    pub fn new(
        homeserver_url: impl Into<String>,
        access_token: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            homeserver_url: homeserver_url.into(),
            access_token: access_token.into(),
            user_id: user_id.into(),
            auth_header: default_auth_header(),
        }
    }

    pub fn token(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
