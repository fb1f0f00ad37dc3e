use thiserror::Error;

pub mod api_err;

pub type Reason = String;

pub type Result<T> = std::result::Result<T, Error>;

pub const FORBIDDEN_STATUS: u16 = 403;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// caller passed an unusable argument, e.g. an empty group id
    #[error("invalid argument: {0}")]
    InvalidArgument(Reason),
    /// server answered with a non-2xx status
    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: api_err::Error },
    /// request could not be sent or the response could not be read
    #[error("network error: {0}")]
    Network(Reason),
    /// convert server message to local type
    #[error("convert error: {0}")]
    Convert(Reason),
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// the server refused the request for the authenticated user
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(FORBIDDEN_STATUS)
    }
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Error::Convert(err.to_string()),
            err => Error::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Convert(value.to_string())
    }
}
