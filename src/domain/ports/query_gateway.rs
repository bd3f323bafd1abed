//! QueryGateway port - run a telemetry query, get rows back
//!
//! The domain only knows that a query string produces rows of
//! column → JSON value. Transport, authentication and the GraphQL envelope
//! live in the infrastructure layer.

use serde_json::{Map, Value};

/// One result row: column name → scalar or array value
pub type Row = Map<String, Value>;

/// Query operation errors. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The request never produced a response
    #[error("query transport failed: {0}")]
    Transport(String),

    /// The backend answered with an error
    #[error("query rejected by backend: {0}")]
    Rejected(String),

    /// The response did not have the expected shape
    #[error("unexpected query response: {0}")]
    InvalidResponse(String),
}

/// Abstract telemetry query service
pub trait QueryGateway {
    /// Run `query` and return every result row
    fn run_query(&self, query: &str) -> Result<Vec<Row>, QueryError>;
}
