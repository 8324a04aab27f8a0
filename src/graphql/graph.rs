use async_graphql::{Context, ErrorExtensions, Json, Object, Result, SimpleObject, ID};

use crate::db::models::roster::{NamedNode, NodeLabel};
use crate::db::models::user::{NewUser, UpdateUser, User};
use crate::db::store::{SharedStore, StoreError};
use crate::middleware::auth::AuthUser;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Coach")]
pub struct CoachGQL {
    pub name: String,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Team")]
pub struct TeamGQL {
    pub name: String,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "User")]
pub struct UserGQL {
    pub id: ID,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<NamedNode> for CoachGQL {
    fn from(node: NamedNode) -> Self {
        Self { name: node.name }
    }
}

impl From<NamedNode> for TeamGQL {
    fn from(node: NamedNode) -> Self {
        Self { name: node.name }
    }
}

impl From<User> for UserGQL {
    fn from(user: User) -> Self {
        Self {
            id: ID::from(user.id.to_string()),
            name: user.name,
            email: user.email,
        }
    }
}

fn parse_user_id(id: &ID) -> Result<i64> {
    id.parse::<i64>().map_err(|_| {
        async_graphql::Error::new("invalid user id").extend_with(|_, e| {
            e.set("code", "BAD_USER_INPUT");
            e.set("id", id.as_str());
        })
    })
}

/// Store failures are not recovered; they become a GraphQL error entry.
fn store_failure(field: &'static str) -> impl FnOnce(StoreError) -> async_graphql::Error {
    move |err| {
        tracing::error!(field, "Store query failed: {}", err);
        async_graphql::Error::new(err.to_string())
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    async fn get_coaches(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<CoachGQL>>>> {
        let store = ctx.data::<SharedStore>()?;
        let coaches = store
            .list_by_label(NodeLabel::Coach)
            .await
            .map_err(store_failure("getCoaches"))?;
        Ok(Some(coaches.into_iter().map(|c| Some(c.into())).collect()))
    }

    async fn get_teams(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<TeamGQL>>>> {
        let store = ctx.data::<SharedStore>()?;
        let teams = store
            .list_by_label(NodeLabel::Team)
            .await
            .map_err(store_failure("getTeams"))?;
        Ok(Some(teams.into_iter().map(|t| Some(t.into())).collect()))
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<UserGQL>>>> {
        let store = ctx.data::<SharedStore>()?;
        let users = store.list_users().await.map_err(store_failure("users"))?;
        Ok(Some(users.into_iter().map(|u| Some(u.into())).collect()))
    }

    /// `null` when no user has this id.
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserGQL>> {
        let id = parse_user_id(&id)?;
        let store = ctx.data::<SharedStore>()?;
        let user = store.find_user(id).await.map_err(store_failure("user"))?;
        Ok(user.map(UserGQL::from))
    }

    /// The `user` claim of the caller's token, or `null` when auth is disabled.
    async fn me(&self, ctx: &Context<'_>) -> Option<Json<serde_json::Value>> {
        ctx.data_opt::<AuthUser>().map(|user| Json(user.0.clone()))
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Option<UserGQL>> {
        let store = ctx.data::<SharedStore>()?;
        let user = store
            .create_user(NewUser { name, email })
            .await
            .map_err(store_failure("createUser"))?;
        Ok(Some(user.into()))
    }

    /// Omitted arguments keep their stored value. `null` when no user has this id.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Option<UserGQL>> {
        let user_id = parse_user_id(&id)?;
        let store = ctx.data::<SharedStore>()?;
        let user = store
            .update_user(user_id, UpdateUser { name, email })
            .await
            .map_err(store_failure("updateUser"))?;
        Ok(user.map(UserGQL::from))
    }

    /// Confirms even when no user had this id.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<String>> {
        let user_id = parse_user_id(&id)?;
        let store = ctx.data::<SharedStore>()?;
        store
            .delete_user(user_id)
            .await
            .map_err(store_failure("deleteUser"))?;
        Ok(Some(format!("User with ID {} deleted successfully", id.as_str())))
    }
}
