use crate::config::ClientConfig;

pub use self::{group::GroupApi, http::GroupHttp};

mod group;
mod http;
#[cfg(test)]
pub(crate) mod mock;

pub const AUTHORIZE_HEADER: &str = "Authorization";

pub fn groups(config: &ClientConfig) -> Box<dyn GroupApi> {
    Box::new(GroupHttp::new(config))
}
