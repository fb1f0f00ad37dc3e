use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// `errcode` values a homeserver returns for the group endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ErrorKind {
    #[serde(rename = "M_FORBIDDEN")]
    Forbidden,
    #[serde(rename = "M_UNKNOWN_TOKEN")]
    UnknownToken,
    #[serde(rename = "M_MISSING_TOKEN")]
    MissingToken,
    #[serde(rename = "M_NOT_FOUND")]
    NotFound,
    #[serde(rename = "M_BAD_JSON")]
    BadJson,
    #[serde(rename = "M_NOT_JSON")]
    NotJson,
    #[serde(rename = "M_INVALID_PARAM")]
    InvalidParam,
    #[serde(rename = "M_LIMIT_EXCEEDED")]
    LimitExceeded,
    #[serde(rename = "M_GUEST_ACCESS_FORBIDDEN")]
    GuestAccessForbidden,
    #[serde(rename = "M_UNKNOWN", other)]
    UnknownError,
}

/// Matrix error body, `{"errcode": "...", "error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    #[serde(rename = "errcode")]
    kind: ErrorKind,
    #[serde(rename = "error", default)]
    details: Option<String>,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.details {
            Some(details) => write!(f, "{:?}: {}", self.kind, details),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl Error {
    pub fn new(kind: ErrorKind, details: impl Into<String>) -> Self {
        Error {
            kind,
            details: Some(details.into()),
        }
    }

    pub fn unknown_error() -> Self {
        Error {
            kind: ErrorKind::UnknownError,
            details: None,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_matrix_error() {
        let err: Error =
            serde_json::from_str(r#"{"errcode":"M_FORBIDDEN","error":"User is not a member"}"#)
                .unwrap();
        assert_eq!(err.kind(), &ErrorKind::Forbidden);
        assert_eq!(err.details(), Some("User is not a member"));
        assert_eq!(err.to_string(), "Forbidden: User is not a member");
    }

    #[test]
    fn unknown_errcode_falls_back() {
        let err: Error = serde_json::from_str(r#"{"errcode":"M_SOMETHING_NEW"}"#).unwrap();
        assert_eq!(err.kind(), &ErrorKind::UnknownError);
        assert_eq!(err.details(), None);
    }
}
