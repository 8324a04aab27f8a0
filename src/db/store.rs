use std::sync::Arc;

use async_trait::async_trait;
use neo4rs::Graph;

use crate::db::models::roster::{NamedNode, NodeLabel};
use crate::db::models::user::{NewUser, UpdateUser, User};
use crate::db::queries;

/// Errors from the graph store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Failed to read node: {0}")]
    Deserialization(String),

    #[error("Query returned no rows: {0}")]
    EmptyResult(&'static str),
}

/// Every read and write the resolvers issue against the graph.
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn list_by_label(&self, label: NodeLabel) -> Result<Vec<NamedNode>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Returns `None` when no user has the given id.
    async fn update_user(&self, id: i64, changes: UpdateUser) -> Result<Option<User>, StoreError>;

    /// Detach-deletes the node. Deleting a missing id is not an error.
    async fn delete_user(&self, id: i64) -> Result<(), StoreError>;

    /// Round-trip a trivial statement to confirm the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn GraphStore>;

/// Neo4j-backed store. Clone is cheap, the pool is shared.
#[derive(Clone)]
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn list_by_label(&self, label: NodeLabel) -> Result<Vec<NamedNode>, StoreError> {
        queries::roster::list_by_label(&self.graph, label).await
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        queries::user::list_users(&self.graph).await
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        queries::user::find_user(&self.graph, id).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        queries::user::create_user(&self.graph, user).await
    }

    async fn update_user(&self, id: i64, changes: UpdateUser) -> Result<Option<User>, StoreError> {
        queries::user::update_user(&self.graph, id, changes).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        queries::user::delete_user(&self.graph, id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        queries::fetch_one(&self.graph, neo4rs::query("RETURN 1 AS ok")).await?;
        Ok(())
    }
}
