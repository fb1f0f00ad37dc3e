use crate::{
    error::Result,
    model::{
        group::{GroupMemberFromServer, GroupRoomFromServer},
        summary::GroupSummary,
        Chunk,
    },
};

/// Backend operations on one community. Failures carry the HTTP status
/// when the server answered (see [`crate::Error::status`]).
#[async_trait::async_trait(?Send)]
pub trait GroupApi {
    /// id of the authenticated user
    fn user_id(&self) -> &str;

    async fn get_group_users(&self, group_id: &str) -> Result<Chunk<GroupMemberFromServer>>;

    async fn get_group_invited_users(
        &self,
        group_id: &str,
    ) -> Result<Chunk<GroupMemberFromServer>>;

    async fn get_group_summary(&self, group_id: &str) -> Result<GroupSummary>;

    async fn get_group_rooms(&self, group_id: &str) -> Result<Chunk<GroupRoomFromServer>>;

    async fn add_room_to_group(&self, group_id: &str, room_id: &str, is_public: bool)
        -> Result<()>;

    async fn update_group_room_visibility(
        &self,
        group_id: &str,
        room_id: &str,
        is_public: bool,
    ) -> Result<()>;

    async fn remove_room_from_group(&self, group_id: &str, room_id: &str) -> Result<()>;

    async fn invite_user_to_group(&self, group_id: &str, user_id: &str) -> Result<()>;

    async fn accept_group_invite(&self, group_id: &str) -> Result<()>;

    async fn add_room_to_group_summary(
        &self,
        group_id: &str,
        room_id: &str,
        category_id: Option<&str>,
    ) -> Result<()>;

    async fn add_user_to_group_summary(
        &self,
        group_id: &str,
        user_id: &str,
        role_id: Option<&str>,
    ) -> Result<()>;

    async fn remove_room_from_group_summary(&self, group_id: &str, room_id: &str) -> Result<()>;

    async fn remove_user_from_group_summary(&self, group_id: &str, user_id: &str) -> Result<()>;

    async fn set_group_publicity(&self, group_id: &str, is_published: bool) -> Result<()>;
}
