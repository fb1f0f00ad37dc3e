pub mod api;
pub mod config;
pub mod error;
pub mod flair;
pub mod model;
pub mod state;
pub mod store;

pub use error::{Error, Result};
pub use state::StateKey;
pub use store::{BrowserSpawner, GroupStore, ListenerId, Spawner};
