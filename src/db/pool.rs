use neo4rs::{ConfigBuilder, Graph};

use crate::config::Config;
use crate::db::store::StoreError;

/// Open the bounded Bolt connection pool. Connections are checked out per query.
pub async fn get_graph_pool(config: &Config) -> Result<Graph, StoreError> {
    let neo_config = ConfigBuilder::default()
        .uri(&config.neo4j_uri)
        .user(&config.neo4j_user)
        .password(&config.neo4j_password)
        .max_connections(config.neo4j_max_connections)
        .build()
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    let graph = Graph::connect(neo_config)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    tracing::info!(
        uri = %config.neo4j_uri,
        max_connections = config.neo4j_max_connections,
        "Connected to Neo4j"
    );
    Ok(graph)
}
