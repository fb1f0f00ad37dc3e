use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::json;

use crate::api::group::GroupApi;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{
    group::{GroupMemberFromServer, GroupRoomFromServer},
    summary::GroupSummary,
    Chunk,
};

use super::RespStatus;

const GROUPS_PREFIX: &str = "/_matrix/client/r0/groups";

/// characters left alone when encoding one path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// `groups/{groupId}` followed by `parts`, every segment percent-encoded
fn group_path(group_id: &str, parts: &[&str]) -> String {
    let mut path = format!("{}/{}", GROUPS_PREFIX, encode(group_id));
    for part in parts {
        path.push('/');
        path.push_str(&encode(part));
    }
    path
}

fn summary_room_path(group_id: &str, room_id: &str, category_id: Option<&str>) -> String {
    match category_id {
        Some(category) => group_path(
            group_id,
            &["summary", "categories", category, "rooms", room_id],
        ),
        None => group_path(group_id, &["summary", "rooms", room_id]),
    }
}

fn summary_user_path(group_id: &str, user_id: &str, role_id: Option<&str>) -> String {
    match role_id {
        Some(role) => group_path(group_id, &["summary", "roles", role, "users", user_id]),
        None => group_path(group_id, &["summary", "users", user_id]),
    }
}

fn visibility(is_public: bool) -> &'static str {
    if is_public {
        "public"
    } else {
        "private"
    }
}

/// [`GroupApi`] over the homeserver's client-server API.
pub struct GroupHttp {
    base_url: String,
    token: String,
    auth_header: String,
    user_id: String,
}

impl GroupHttp {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.homeserver_url.trim_end_matches('/').to_string(),
            token: config.token(),
            auth_header: config.auth_header.clone(),
            user_id: config.user_id.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait(?Send)]
impl GroupApi for GroupHttp {
    fn user_id(&self) -> &str {
        &self.user_id
    }

    async fn get_group_users(&self, group_id: &str) -> Result<Chunk<GroupMemberFromServer>> {
        let users = Request::get(&self.url(&group_path(group_id, &["users"])))
            .header(&self.auth_header, &self.token)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(users)
    }

    async fn get_group_invited_users(
        &self,
        group_id: &str,
    ) -> Result<Chunk<GroupMemberFromServer>> {
        let users = Request::get(&self.url(&group_path(group_id, &["invited_users"])))
            .header(&self.auth_header, &self.token)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(users)
    }

    async fn get_group_summary(&self, group_id: &str) -> Result<GroupSummary> {
        let summary = Request::get(&self.url(&group_path(group_id, &["summary"])))
            .header(&self.auth_header, &self.token)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(summary)
    }

    async fn get_group_rooms(&self, group_id: &str) -> Result<Chunk<GroupRoomFromServer>> {
        let rooms = Request::get(&self.url(&group_path(group_id, &["rooms"])))
            .header(&self.auth_header, &self.token)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(rooms)
    }

    async fn add_room_to_group(
        &self,
        group_id: &str,
        room_id: &str,
        is_public: bool,
    ) -> Result<()> {
        Request::put(&self.url(&group_path(group_id, &["admin", "rooms", room_id])))
            .header(&self.auth_header, &self.token)
            .json(&json!({ "m.visibility": { "type": visibility(is_public) } }))?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn update_group_room_visibility(
        &self,
        group_id: &str,
        room_id: &str,
        is_public: bool,
    ) -> Result<()> {
        let path = group_path(
            group_id,
            &["admin", "rooms", room_id, "config", "m.visibility"],
        );
        Request::put(&self.url(&path))
            .header(&self.auth_header, &self.token)
            .json(&json!({ "type": visibility(is_public) }))?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn remove_room_from_group(&self, group_id: &str, room_id: &str) -> Result<()> {
        Request::delete(&self.url(&group_path(group_id, &["admin", "rooms", room_id])))
            .header(&self.auth_header, &self.token)
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn invite_user_to_group(&self, group_id: &str, user_id: &str) -> Result<()> {
        let path = group_path(group_id, &["admin", "users", "invite", user_id]);
        Request::put(&self.url(&path))
            .header(&self.auth_header, &self.token)
            .json(&json!({}))?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn accept_group_invite(&self, group_id: &str) -> Result<()> {
        Request::put(&self.url(&group_path(group_id, &["self", "accept_invite"])))
            .header(&self.auth_header, &self.token)
            .json(&json!({}))?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn add_room_to_group_summary(
        &self,
        group_id: &str,
        room_id: &str,
        category_id: Option<&str>,
    ) -> Result<()> {
        Request::put(&self.url(&summary_room_path(group_id, room_id, category_id)))
            .header(&self.auth_header, &self.token)
            .json(&json!({}))?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn add_user_to_group_summary(
        &self,
        group_id: &str,
        user_id: &str,
        role_id: Option<&str>,
    ) -> Result<()> {
        Request::put(&self.url(&summary_user_path(group_id, user_id, role_id)))
            .header(&self.auth_header, &self.token)
            .json(&json!({}))?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn remove_room_from_group_summary(&self, group_id: &str, room_id: &str) -> Result<()> {
        Request::delete(&self.url(&summary_room_path(group_id, room_id, None)))
            .header(&self.auth_header, &self.token)
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn remove_user_from_group_summary(&self, group_id: &str, user_id: &str) -> Result<()> {
        Request::delete(&self.url(&summary_user_path(group_id, user_id, None)))
            .header(&self.auth_header, &self.token)
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn set_group_publicity(&self, group_id: &str, is_published: bool) -> Result<()> {
        Request::put(&self.url(&group_path(group_id, &["self", "update_publicity"])))
            .header(&self.auth_header, &self.token)
            .json(&json!({ "publicise": is_published }))?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}
