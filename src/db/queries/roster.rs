use neo4rs::{query, Graph, Node};

use crate::db::models::roster::{NamedNode, NodeLabel};
use crate::db::queries::{fetch_all, node_of};
use crate::db::store::StoreError;

/// All nodes carrying `label`, projected to their name, in store order.
pub async fn list_by_label(graph: &Graph, label: NodeLabel) -> Result<Vec<NamedNode>, StoreError> {
    let q = query("MATCH (n) WHERE $label IN labels(n) RETURN n").param("label", label.as_str());

    let rows = fetch_all(graph, q).await?;
    tracing::debug!(%label, count = rows.len(), "Listed nodes by label");

    rows.iter()
        .map(|row| node_of(row).map(|node| named_node(&node)))
        .collect()
}

fn named_node(node: &Node) -> NamedNode {
    NamedNode {
        name: node.get::<String>("name").unwrap_or_default(),
    }
}
