use std::fmt;

use thiserror::Error;

/// Failure from the jobs query boundary. The core only ever sees the
/// rendered message; the kind exists for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct QueryError {
    pub kind: QueryFailure,
    pub message: String,
}

impl QueryError {
    pub(crate) fn new(kind: QueryFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFailure {
    /// The endpoint URL or client configuration was rejected.
    InvalidEndpoint,
    /// Transport-level failure (DNS, connection, TLS).
    Network,
    /// The request timed out.
    Timeout,
    /// The service answered with a non-success HTTP status.
    HttpStatus(u16),
    /// The body was not a parseable GraphQL response.
    MalformedResponse,
    /// The service reported errors in the GraphQL envelope.
    Server,
}

impl fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryFailure::InvalidEndpoint => write!(f, "invalid endpoint"),
            QueryFailure::Network => write!(f, "network error"),
            QueryFailure::Timeout => write!(f, "timeout"),
            QueryFailure::HttpStatus(code) => write!(f, "http status {code}"),
            QueryFailure::MalformedResponse => write!(f, "malformed response"),
            QueryFailure::Server => write!(f, "server error"),
        }
    }
}
