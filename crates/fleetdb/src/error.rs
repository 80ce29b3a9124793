use derive_more::Display;
use fleetdb_core::{query::PageError, service::ServiceError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for Error {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::InvalidInput(_) => Self::new(
                ErrorKind::InvalidInput,
                ErrorOrigin::Service,
                err.to_string(),
            ),

            ServiceError::NotFound { .. } => {
                Self::new(ErrorKind::NotFound, ErrorOrigin::Service, err.to_string())
            }

            ServiceError::BadId(_) => {
                Self::new(ErrorKind::BadRequest, ErrorOrigin::Service, err.to_string())
            }

            ServiceError::Store(_) => {
                Self::new(ErrorKind::Store, ErrorOrigin::Store, err.to_string())
            }
        }
    }
}

impl From<PageError> for Error {
    fn from(err: PageError) -> Self {
        Self::new(ErrorKind::BadRequest, ErrorOrigin::Query, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and transport adapters.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// A create or edit candidate violated a field rule.
    InvalidInput,

    /// Well-formed id, but no such record.
    NotFound,

    /// Malformed request input (non-positive id, negative page window).
    BadRequest,

    /// The persistence collaborator failed; the caller cannot remediate.
    Store,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers and transport adapters.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Service,
    Query,
    Store,
}

///
/// TESTS
///
