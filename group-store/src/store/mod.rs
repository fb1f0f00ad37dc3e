use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use yew::{AttrValue, Callback};

use crate::api::GroupApi;
use crate::error::{Error, Result};
use crate::flair::FlairCache;
use crate::model::{
    group::{GroupMember, GroupRoom},
    summary::GroupSummary,
};
use crate::state::{GroupState, StateKey};

pub use spawner::{BrowserSpawner, Spawner};

mod spawner;

/// handle returned on registration, used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

#[derive(Debug)]
struct Listeners<T> {
    next_id: usize,
    callbacks: IndexMap<ListenerId, Callback<T>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            callbacks: IndexMap::new(),
        }
    }
}

impl<T> Listeners<T> {
    fn insert(&mut self, callback: Callback<T>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.callbacks.insert(id, callback);
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        // keep registration order for the remaining listeners
        self.callbacks.shift_remove(&id).is_some()
    }

    fn snapshot(&self) -> Vec<Callback<T>> {
        self.callbacks.values().cloned().collect()
    }
}

/// Cached view of one community, kept fresh from a [`GroupApi`].
///
/// Four slices are cached: summary, rooms, members and invited members.
/// Each fetch only writes its own slice and then emits an update; a failed
/// fetch leaves the slice untouched and goes to the error listeners
/// instead. Cloning is cheap and every clone shares the same state.
#[derive(Clone)]
pub struct GroupStore {
    group_id: AttrValue,
    client: Rc<dyn GroupApi>,
    flair: Rc<dyn FlairCache>,
    spawner: Rc<dyn Spawner>,
    state: Rc<RefCell<GroupState>>,
    listeners: Rc<RefCell<Listeners<()>>>,
    error_listeners: Rc<RefCell<Listeners<Error>>>,
}

impl GroupStore {
    pub fn new(
        client: Rc<dyn GroupApi>,
        flair: Rc<dyn FlairCache>,
        spawner: Rc<dyn Spawner>,
        group_id: impl Into<AttrValue>,
    ) -> Result<Self> {
        let group_id = group_id.into();
        if group_id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "group id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            group_id,
            client,
            flair,
            spawner,
            state: Rc::new(RefCell::new(GroupState::default())),
            listeners: Rc::default(),
            error_listeners: Rc::default(),
        })
    }

    pub fn group_id(&self) -> &AttrValue {
        &self.group_id
    }

    /// Subscribes to updates.
    ///
    /// The new listener (and every other one) is notified once right away
    /// with whatever is cached, then summary, rooms and members are fetched
    /// as independent tasks that each notify when they land.
    pub fn register_listener(&self, callback: Callback<()>) -> ListenerId {
        let id = self.listeners.borrow_mut().insert(callback);
        self.notify();

        let store = self.clone();
        self.spawner
            .spawn(Box::pin(async move { store.refresh_summary().await }));
        let store = self.clone();
        self.spawner
            .spawn(Box::pin(async move { store.refresh_rooms().await }));
        let store = self.clone();
        self.spawner
            .spawn(Box::pin(async move { store.refresh_members().await }));
        id
    }

    pub fn unregister_listener(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id)
    }

    /// Subscribes to fetch failures. Registering does not trigger a fetch.
    pub fn register_error_listener(&self, callback: Callback<Error>) -> ListenerId {
        self.error_listeners.borrow_mut().insert(callback)
    }

    pub fn unregister_error_listener(&self, id: ListenerId) -> bool {
        self.error_listeners.borrow_mut().remove(id)
    }

    fn notify(&self) {
        // no borrow is held while listeners run, they may read the store
        let listeners = self.listeners.borrow().snapshot();
        for listener in listeners {
            listener.emit(());
        }
    }

    fn report(&self, what: &str, err: Error) {
        log::error!("failed to fetch {what} of {}: {err}", self.group_id);
        let listeners = self.error_listeners.borrow().snapshot();
        for listener in listeners {
            listener.emit(err.clone());
        }
    }

    pub fn summary(&self) -> GroupSummary {
        self.state.borrow().summary.clone()
    }

    pub fn rooms(&self) -> Vec<GroupRoom> {
        self.state.borrow().rooms.clone()
    }

    pub fn members(&self) -> Vec<GroupMember> {
        self.state.borrow().members.clone()
    }

    pub fn invited_members(&self) -> Vec<GroupMember> {
        self.state.borrow().invited_members.clone()
    }

    /// whether the current user publicises this group, `None` until known
    pub fn group_publicity(&self) -> Option<bool> {
        self.state.borrow().summary.is_publicised()
    }

    pub fn is_user_privileged(&self) -> Option<bool> {
        self.state.borrow().summary.is_privileged()
    }

    pub fn is_state_ready(&self, key: StateKey) -> bool {
        self.state.borrow().is_ready(key)
    }

    pub async fn refresh_summary(&self) {
        log::debug!("fetch summary of {}", self.group_id);
        match self.client.get_group_summary(&self.group_id).await {
            Ok(summary) => {
                self.state.borrow_mut().set_summary(summary);
                self.notify();
            }
            Err(err) => self.report("summary", err),
        }
    }

    pub async fn refresh_rooms(&self) {
        log::debug!("fetch rooms of {}", self.group_id);
        match self.client.get_group_rooms(&self.group_id).await {
            Ok(rooms) => {
                let rooms = rooms.chunk.into_iter().map(GroupRoom::from).collect();
                self.state.borrow_mut().set_rooms(rooms);
                self.notify();
            }
            Err(err) => self.report("rooms", err),
        }
    }

    /// Fetches members and invited members concurrently.
    pub async fn refresh_members(&self) {
        futures::join!(self.fetch_members(), self.fetch_invited_members());
    }

    async fn fetch_members(&self) {
        log::debug!("fetch members of {}", self.group_id);
        match self.client.get_group_users(&self.group_id).await {
            Ok(users) => {
                let members = users.chunk.into_iter().map(GroupMember::from).collect();
                self.state.borrow_mut().set_members(members);
                self.notify();
            }
            Err(err) => self.report("members", err),
        }
    }

    async fn fetch_invited_members(&self) {
        match self.client.get_group_invited_users(&self.group_id).await {
            Ok(users) => {
                let members = users.chunk.into_iter().map(GroupMember::from).collect();
                self.state.borrow_mut().set_invited_members(members);
                self.notify();
            }
            // only members may list invitees
            Err(err) if err.is_forbidden() => {
                log::debug!("not allowed to list invitees of {}", self.group_id);
            }
            Err(err) => self.report("invited members", err),
        }
    }

    // Mutations below fail only when the backend call fails. The refresh that
    // follows reports its own failure to the error listeners, not to the caller.

    pub async fn add_room_to_group(&self, room_id: &str, is_public: bool) -> Result<()> {
        self.client
            .add_room_to_group(&self.group_id, room_id, is_public)
            .await?;
        self.refresh_rooms().await;
        Ok(())
    }

    pub async fn update_group_room_visibility(&self, room_id: &str, is_public: bool) -> Result<()> {
        self.client
            .update_group_room_visibility(&self.group_id, room_id, is_public)
            .await?;
        self.refresh_rooms().await;
        Ok(())
    }

    pub async fn remove_room_from_group(&self, room_id: &str) -> Result<()> {
        self.client
            .remove_room_from_group(&self.group_id, room_id)
            .await?;
        // the room may also have been listed in the summary
        self.refresh_summary().await;
        self.refresh_rooms().await;
        Ok(())
    }

    pub async fn invite_user_to_group(&self, user_id: &str) -> Result<()> {
        self.client
            .invite_user_to_group(&self.group_id, user_id)
            .await?;
        self.refresh_members().await;
        Ok(())
    }

    pub async fn accept_group_invite(&self) -> Result<()> {
        self.client.accept_group_invite(&self.group_id).await?;
        self.refresh_rooms().await;
        self.refresh_members().await;
        Ok(())
    }

    pub async fn add_room_to_group_summary(
        &self,
        room_id: &str,
        category_id: Option<&str>,
    ) -> Result<()> {
        self.client
            .add_room_to_group_summary(&self.group_id, room_id, category_id)
            .await?;
        self.refresh_summary().await;
        Ok(())
    }

    pub async fn add_user_to_group_summary(
        &self,
        user_id: &str,
        role_id: Option<&str>,
    ) -> Result<()> {
        self.client
            .add_user_to_group_summary(&self.group_id, user_id, role_id)
            .await?;
        self.refresh_summary().await;
        Ok(())
    }

    pub async fn remove_room_from_group_summary(&self, room_id: &str) -> Result<()> {
        self.client
            .remove_room_from_group_summary(&self.group_id, room_id)
            .await?;
        self.refresh_summary().await;
        Ok(())
    }

    pub async fn remove_user_from_group_summary(&self, user_id: &str) -> Result<()> {
        self.client
            .remove_user_from_group_summary(&self.group_id, user_id)
            .await?;
        self.refresh_summary().await;
        Ok(())
    }

    /// Publicises (or hides) the group on the current user's profile.
    pub async fn set_group_publicity(&self, is_published: bool) -> Result<()> {
        self.client
            .set_group_publicity(&self.group_id, is_published)
            .await?;
        self.flair
            .invalidate_publicised_groups(self.client.user_id());
        self.refresh_summary().await;
        Ok(())
    }
}
