use neo4rs::{query, Graph, Row};

use crate::db::models::roster::NodeLabel;
use crate::db::models::user::{NewUser, UpdateUser, User};
use crate::db::queries::{fetch_all, fetch_one, node_of};
use crate::db::store::StoreError;

pub async fn list_users(graph: &Graph) -> Result<Vec<User>, StoreError> {
    let q = query("MATCH (n) WHERE $label IN labels(n) RETURN n")
        .param("label", NodeLabel::User.as_str());

    let rows = fetch_all(graph, q).await?;
    rows.iter().map(user_from_row).collect()
}

pub async fn find_user(graph: &Graph, id: i64) -> Result<Option<User>, StoreError> {
    let q = query("MATCH (n:User) WHERE id(n) = $id RETURN n").param("id", id);

    fetch_one(graph, q).await?.as_ref().map(user_from_row).transpose()
}

pub async fn create_user(graph: &Graph, user: NewUser) -> Result<User, StoreError> {
    let q = query("CREATE (n:User {name: $name, email: $email}) RETURN n")
        .param("name", user.name)
        .param("email", user.email);

    let row = fetch_one(graph, q)
        .await?
        .ok_or(StoreError::EmptyResult("CREATE (n:User)"))?;
    let created = user_from_row(&row)?;
    tracing::info!(id = created.id, "Created user");
    Ok(created)
}

pub async fn update_user(
    graph: &Graph,
    id: i64,
    changes: UpdateUser,
) -> Result<Option<User>, StoreError> {
    if changes.is_empty() {
        return find_user(graph, id).await;
    }

    let q = query(
        "MATCH (n:User) WHERE id(n) = $id
         SET n.name = coalesce($name, n.name),
             n.email = coalesce($email, n.email)
         RETURN n",
    )
    .param("id", id)
    .param("name", changes.name)
    .param("email", changes.email);

    let updated = fetch_one(graph, q).await?.as_ref().map(user_from_row).transpose()?;
    if updated.is_none() {
        tracing::warn!(id, "Update matched no user");
    }
    Ok(updated)
}

pub async fn delete_user(graph: &Graph, id: i64) -> Result<(), StoreError> {
    let q = query("MATCH (n:User) WHERE id(n) = $id DETACH DELETE n").param("id", id);
    graph.run(q).await?;
    tracing::info!(id, "Deleted user");
    Ok(())
}

fn user_from_row(row: &Row) -> Result<User, StoreError> {
    let node = node_of(row)?;
    Ok(User {
        id: node.id(),
        name: node.get::<String>("name").ok(),
        email: node.get::<String>("email").ok(),
    })
}
