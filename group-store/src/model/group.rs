use serde::{Deserialize, Serialize};
use yew::AttrValue;

/// Room record as returned by `GET groups/{groupId}/rooms`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct GroupRoomFromServer {
    pub room_id: AttrValue,
    #[serde(default)]
    pub name: Option<AttrValue>,
    #[serde(default)]
    pub topic: Option<AttrValue>,
    #[serde(default)]
    pub canonical_alias: Option<AttrValue>,
    #[serde(default)]
    pub avatar_url: Option<AttrValue>,
    #[serde(default)]
    pub num_joined_members: u64,
    #[serde(default)]
    pub world_readable: bool,
    #[serde(default)]
    pub guest_can_join: bool,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct GroupRoom {
    pub room_id: AttrValue,
    /// name, else canonical alias, else room id
    pub display_name: AttrValue,
    pub name: Option<AttrValue>,
    pub canonical_alias: Option<AttrValue>,
    pub avatar_url: Option<AttrValue>,
    pub topic: Option<AttrValue>,
    pub num_joined_members: u64,
    pub world_readable: bool,
    pub guest_can_join: bool,
    pub is_public: bool,
}

impl From<GroupRoomFromServer> for GroupRoom {
    fn from(value: GroupRoomFromServer) -> Self {
        let display_name = value
            .name
            .clone()
            .or_else(|| value.canonical_alias.clone())
            .unwrap_or_else(|| value.room_id.clone());
        Self {
            room_id: value.room_id,
            display_name,
            name: value.name,
            canonical_alias: value.canonical_alias,
            avatar_url: value.avatar_url,
            topic: value.topic,
            num_joined_members: value.num_joined_members,
            world_readable: value.world_readable,
            guest_can_join: value.guest_can_join,
            is_public: value.is_public,
        }
    }
}

/// Member record as returned by `GET groups/{groupId}/users` and `invited_users`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct GroupMemberFromServer {
    pub user_id: AttrValue,
    #[serde(default)]
    pub displayname: Option<AttrValue>,
    #[serde(default)]
    pub avatar_url: Option<AttrValue>,
    #[serde(default)]
    pub is_privileged: bool,
    #[serde(default)]
    pub is_public: bool,
}

/// Group member information
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct GroupMember {
    pub user_id: AttrValue,
    pub display_name: Option<AttrValue>,
    pub avatar_url: Option<AttrValue>,
    pub is_privileged: bool,
    pub is_public: bool,
}

impl From<GroupMemberFromServer> for GroupMember {
    fn from(value: GroupMemberFromServer) -> Self {
        Self {
            user_id: value.user_id,
            display_name: value.displayname,
            avatar_url: value.avatar_url,
            is_privileged: value.is_privileged,
            is_public: value.is_public,
        }
    }
}

impl GroupMember {
    /// display name if the member set one, user id otherwise
    pub fn name(&self) -> AttrValue {
        self.display_name
            .clone()
            .unwrap_or_else(|| self.user_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chunk;

    #[test]
    fn room_display_name_fallback() {
        let rooms: Chunk<GroupRoomFromServer> = serde_json::from_str(
            r##"{"chunk": [
                {"room_id": "!a:example.org", "name": "Lobby", "canonical_alias": "#lobby:example.org"},
                {"room_id": "!b:example.org", "canonical_alias": "#dev:example.org", "num_joined_members": 4},
                {"room_id": "!c:example.org", "is_public": true}
            ]}"##,
        )
        .unwrap();
        let rooms: Vec<GroupRoom> = rooms.chunk.into_iter().map(GroupRoom::from).collect();

        assert_eq!(rooms[0].display_name.as_str(), "Lobby");
        assert_eq!(rooms[1].display_name.as_str(), "#dev:example.org");
        assert_eq!(rooms[1].num_joined_members, 4);
        assert_eq!(rooms[2].display_name.as_str(), "!c:example.org");
        assert!(rooms[2].is_public);
    }

    #[test]
    fn member_from_server() {
        let member: GroupMemberFromServer = serde_json::from_str(
            r#"{"user_id": "@bob:example.org", "displayname": "Bob", "is_privileged": true}"#,
        )
        .unwrap();
        let member = GroupMember::from(member);
        assert_eq!(member.name().as_str(), "Bob");
        assert!(member.is_privileged);
        assert!(!member.is_public);

        let anonymous = GroupMember::from(GroupMemberFromServer {
            user_id: "@carol:example.org".into(),
            ..Default::default()
        });
        assert_eq!(anonymous.name().as_str(), "@carol:example.org");
    }
}
