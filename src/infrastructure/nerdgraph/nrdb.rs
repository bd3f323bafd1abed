//! NRQL query gateway backed by NerdGraph

use serde_json::{json, Value};

use super::client::{GraphQlExecutor, NerdGraphClient, NerdGraphError};
use crate::domain::ports::query_gateway::{QueryError, QueryGateway, Row};

const NRQL_DOCUMENT: &str = "query($accountId: Int!, $nrql: Nrql!) { actor { account(id: $accountId) { nrql(query: $nrql) { results } } } }";

impl From<NerdGraphError> for QueryError {
    fn from(err: NerdGraphError) -> Self {
        match err {
            NerdGraphError::Transport(message) => QueryError::Transport(message),
            NerdGraphError::Status { .. } | NerdGraphError::GraphQl(_) => {
                QueryError::Rejected(err.to_string())
            }
            NerdGraphError::Decode(_) | NerdGraphError::MissingData => {
                QueryError::InvalidResponse(err.to_string())
            }
        }
    }
}

/// Runs NRQL against one account
pub struct NrdbQueryGateway<E: GraphQlExecutor = NerdGraphClient> {
    executor: E,
    account_id: u64,
}

impl<E: GraphQlExecutor> NrdbQueryGateway<E> {
    pub fn new(executor: E, account_id: u64) -> Self {
        Self {
            executor,
            account_id,
        }
    }
}

impl<E: GraphQlExecutor> QueryGateway for NrdbQueryGateway<E> {
    fn run_query(&self, query: &str) -> Result<Vec<Row>, QueryError> {
        tracing::debug!(account_id = self.account_id, nrql = query, "running NRQL");

        let data = self.executor.execute(
            NRQL_DOCUMENT,
            json!({ "accountId": self.account_id, "nrql": query }),
        )?;

        let results = match data.pointer("/actor/account/nrql/results") {
            Some(Value::Array(results)) => results,
            Some(Value::Null) | None => {
                return Err(QueryError::InvalidResponse(
                    "missing actor.account.nrql.results".to_string(),
                ))
            }
            Some(other) => {
                return Err(QueryError::InvalidResponse(format!(
                    "results is not an array: {}",
                    other
                )))
            }
        };

        results
            .iter()
            .enumerate()
            .map(|(index, row)| match row {
                Value::Object(map) => Ok(map.clone()),
                other => Err(QueryError::InvalidResponse(format!(
                    "result row {} is not an object: {}",
                    index, other
                ))),
            })
            .collect()
    }
}
