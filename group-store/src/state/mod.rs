use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;
use crate::model::{
    group::{GroupMember, GroupRoom},
    summary::GroupSummary,
};

/// cached slices of a group that can be waited on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    GroupMembers,
    GroupInvitedMembers,
    Summary,
    GroupRooms,
}

impl StateKey {
    pub const ALL: [StateKey; 4] = [
        StateKey::GroupMembers,
        StateKey::GroupInvitedMembers,
        StateKey::Summary,
        StateKey::GroupRooms,
    ];
}

impl Display for StateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StateKey::GroupMembers => write!(f, "GroupMembers"),
            StateKey::GroupInvitedMembers => write!(f, "GroupInvitedMembers"),
            StateKey::Summary => write!(f, "Summary"),
            StateKey::GroupRooms => write!(f, "GroupRooms"),
        }
    }
}

impl FromStr for StateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GroupMembers" => Ok(StateKey::GroupMembers),
            "GroupInvitedMembers" => Ok(StateKey::GroupInvitedMembers),
            "Summary" => Ok(StateKey::Summary),
            "GroupRooms" => Ok(StateKey::GroupRooms),
            other => Err(Error::InvalidArgument(format!("unknown state key {other}"))),
        }
    }
}

/// Everything one store knows about its group.
///
/// A slice only changes when its fetch succeeds, and a readiness flag is
/// only ever set, never cleared.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GroupState {
    pub summary: GroupSummary,
    pub rooms: Vec<GroupRoom>,
    pub members: Vec<GroupMember>,
    pub invited_members: Vec<GroupMember>,
    ready: HashMap<StateKey, bool>,
}

impl GroupState {
    pub fn is_ready(&self, key: StateKey) -> bool {
        self.ready.get(&key).copied().unwrap_or(false)
    }

    pub fn set_summary(&mut self, summary: GroupSummary) {
        self.summary = summary;
        self.mark_ready(StateKey::Summary);
    }

    pub fn set_rooms(&mut self, rooms: Vec<GroupRoom>) {
        self.rooms = rooms;
        self.mark_ready(StateKey::GroupRooms);
    }

    pub fn set_members(&mut self, members: Vec<GroupMember>) {
        self.members = members;
        self.mark_ready(StateKey::GroupMembers);
    }

    pub fn set_invited_members(&mut self, members: Vec<GroupMember>) {
        self.invited_members = members;
        self.mark_ready(StateKey::GroupInvitedMembers);
    }

    fn mark_ready(&mut self, key: StateKey) {
        self.ready.insert(key, true);
    }
}
