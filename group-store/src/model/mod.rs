use serde::{Deserialize, Serialize};

pub mod group;
pub mod summary;

/// paginated list wrapper the group list endpoints answer with
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Chunk<T> {
    pub chunk: Vec<T>,
    #[serde(default)]
    pub total_room_count_estimate: Option<u64>,
    #[serde(default)]
    pub total_user_count_estimate: Option<u64>,
}
