use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Group summary as returned by `GET groups/{groupId}/summary`.
///
/// Only the `user` section is interpreted; every other field (profile,
/// rooms_section, users_section, ...) is kept verbatim in `rest`.
/// The default value is the empty record `{}`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct GroupSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SummaryUser>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// the authenticated user's relationship to the group
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SummaryUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_publicised: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_privileged: Option<bool>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl GroupSummary {
    pub fn is_publicised(&self) -> Option<bool> {
        self.user.as_ref().and_then(|user| user.is_publicised)
    }

    pub fn is_privileged(&self) -> Option<bool> {
        self.user.as_ref().and_then(|user| user.is_privileged)
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.rest.is_empty()
    }
}
