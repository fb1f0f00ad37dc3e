use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;

use yew::AttrValue;

/// Cache of the groups each user publicises on their profile ("flair").
pub trait FlairCache: Debug {
    fn invalidate_publicised_groups(&self, user_id: &str);
}

/// In-memory flair cache keyed by user id.
#[derive(Debug, Default)]
pub struct PublicisedGroups {
    groups: RefCell<HashMap<String, Vec<AttrValue>>>,
}

impl PublicisedGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: &str) -> Option<Vec<AttrValue>> {
        self.groups.borrow().get(user_id).cloned()
    }

    pub fn insert(&self, user_id: impl Into<String>, groups: Vec<AttrValue>) {
        self.groups.borrow_mut().insert(user_id.into(), groups);
    }
}

impl FlairCache for PublicisedGroups {
    fn invalidate_publicised_groups(&self, user_id: &str) {
        if self.groups.borrow_mut().remove(user_id).is_some() {
            log::debug!("invalidated publicised groups of {user_id}");
        }
    }
}
