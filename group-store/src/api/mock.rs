use std::cell::RefCell;

use crate::api::group::GroupApi;
use crate::error::{api_err, Error, Result};
use crate::model::{
    group::{GroupMemberFromServer, GroupRoomFromServer},
    summary::GroupSummary,
    Chunk,
};

pub const USER_ID: &str = "@alice:example.org";

pub fn http_error(status: u16) -> Error {
    Error::Http {
        status,
        body: api_err::Error::unknown_error(),
    }
}

/// Scripted backend: every call is recorded by name, reads answer with
/// whatever the test put in the matching field.
#[derive(Debug)]
pub struct MockGroupApi {
    pub calls: RefCell<Vec<String>>,
    pub summary: RefCell<Result<GroupSummary>>,
    pub rooms: RefCell<Result<Chunk<GroupRoomFromServer>>>,
    pub users: RefCell<Result<Chunk<GroupMemberFromServer>>>,
    pub invited_users: RefCell<Result<Chunk<GroupMemberFromServer>>>,
    /// when set, every mutation fails with this error
    pub mutation_error: RefCell<Option<Error>>,
}

impl Default for MockGroupApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            summary: RefCell::new(Ok(GroupSummary::default())),
            rooms: RefCell::new(Ok(Chunk::default())),
            users: RefCell::new(Ok(Chunk::default())),
            invited_users: RefCell::new(Ok(Chunk::default())),
            mutation_error: RefCell::new(None),
        }
    }
}

impl MockGroupApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn mutate(&self, call: String) -> Result<()> {
        self.record(call);
        match self.mutation_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn rooms(ids: &[&str]) -> Chunk<GroupRoomFromServer> {
    Chunk {
        chunk: ids
            .iter()
            .map(|id| GroupRoomFromServer {
                room_id: id.to_string().into(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn users(ids: &[&str]) -> Chunk<GroupMemberFromServer> {
    Chunk {
        chunk: ids
            .iter()
            .map(|id| GroupMemberFromServer {
                user_id: id.to_string().into(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

#[async_trait::async_trait(?Send)]
impl GroupApi for MockGroupApi {
    fn user_id(&self) -> &str {
        USER_ID
    }

    async fn get_group_users(&self, group_id: &str) -> Result<Chunk<GroupMemberFromServer>> {
        self.record(format!("get_group_users {group_id}"));
        self.users.borrow().clone()
    }

    async fn get_group_invited_users(
        &self,
        group_id: &str,
    ) -> Result<Chunk<GroupMemberFromServer>> {
        self.record(format!("get_group_invited_users {group_id}"));
        self.invited_users.borrow().clone()
    }

    async fn get_group_summary(&self, group_id: &str) -> Result<GroupSummary> {
        self.record(format!("get_group_summary {group_id}"));
        self.summary.borrow().clone()
    }

    async fn get_group_rooms(&self, group_id: &str) -> Result<Chunk<GroupRoomFromServer>> {
        self.record(format!("get_group_rooms {group_id}"));
        self.rooms.borrow().clone()
    }

    async fn add_room_to_group(
        &self,
        group_id: &str,
        room_id: &str,
        is_public: bool,
    ) -> Result<()> {
        self.mutate(format!("add_room_to_group {group_id} {room_id} {is_public}"))
    }

    async fn update_group_room_visibility(
        &self,
        group_id: &str,
        room_id: &str,
        is_public: bool,
    ) -> Result<()> {
        self.mutate(format!(
            "update_group_room_visibility {group_id} {room_id} {is_public}"
        ))
    }

    async fn remove_room_from_group(&self, group_id: &str, room_id: &str) -> Result<()> {
        self.mutate(format!("remove_room_from_group {group_id} {room_id}"))
    }

    async fn invite_user_to_group(&self, group_id: &str, user_id: &str) -> Result<()> {
        self.mutate(format!("invite_user_to_group {group_id} {user_id}"))
    }

    async fn accept_group_invite(&self, group_id: &str) -> Result<()> {
        self.mutate(format!("accept_group_invite {group_id}"))
    }

    async fn add_room_to_group_summary(
        &self,
        group_id: &str,
        room_id: &str,
        category_id: Option<&str>,
    ) -> Result<()> {
        self.mutate(format!(
            "add_room_to_group_summary {group_id} {room_id} {category_id:?}"
        ))
    }

    async fn add_user_to_group_summary(
        &self,
        group_id: &str,
        user_id: &str,
        role_id: Option<&str>,
    ) -> Result<()> {
        self.mutate(format!(
            "add_user_to_group_summary {group_id} {user_id} {role_id:?}"
        ))
    }

    async fn remove_room_from_group_summary(&self, group_id: &str, room_id: &str) -> Result<()> {
        self.mutate(format!("remove_room_from_group_summary {group_id} {room_id}"))
    }

    async fn remove_user_from_group_summary(&self, group_id: &str, user_id: &str) -> Result<()> {
        self.mutate(format!("remove_user_from_group_summary {group_id} {user_id}"))
    }

    async fn set_group_publicity(&self, group_id: &str, is_published: bool) -> Result<()> {
        self.mutate(format!("set_group_publicity {group_id} {is_published}"))
    }
}
