pub mod roster;
pub mod user;

use neo4rs::{Graph, Node, Query, Row};

use crate::db::store::StoreError;

/// Execute a query and collect every row.
pub(crate) async fn fetch_all(graph: &Graph, query: Query) -> Result<Vec<Row>, StoreError> {
    let mut stream = graph.execute(query).await?;
    let mut rows = Vec::new();
    while let Some(row) = stream.next().await? {
        rows.push(row);
    }
    Ok(rows)
}

/// Execute a query and return the first row, if any.
pub(crate) async fn fetch_one(graph: &Graph, query: Query) -> Result<Option<Row>, StoreError> {
    let mut stream = graph.execute(query).await?;
    Ok(stream.next().await?)
}

/// Every query here returns its node bound as `n`.
pub(crate) fn node_of(row: &Row) -> Result<Node, StoreError> {
    row.get::<Node>("n")
        .map_err(|e| StoreError::Deserialization(format!("expected node `n`: {e}")))
}
