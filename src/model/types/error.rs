use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("HTTP {0}")]
    Http(u16),
    #[error("{0}")]
    Request(String),
    #[error("Error from serde decode: {0}")]
    Decode(String),
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match *self {
            Error::Http(status) => Some(status),
            Error::Request(_) | Error::Decode(_) => None,
        }
    }
}

impl From<Error> for String {
    fn from(val: Error) -> Self {
        val.to_string()
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return Error::Decode(e.to_string());
        }
        match e.status() {
            Some(status) => Error::Http(status.as_u16()),
            None => Error::Request(e.to_string()),
        }
    }
}
