use async_trait::async_trait;
use gloo_net::http::Response;

pub use group::*;

use crate::error::{api_err, Error, Result};

mod group;

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        if self.ok() {
            Ok(self)
        } else {
            let status = self.status();
            // matrix error body, if the server sent one
            let body = self
                .json::<api_err::Error>()
                .await
                .unwrap_or(api_err::Error::unknown_error());
            Err(Error::Http { status, body })
        }
    }
}
