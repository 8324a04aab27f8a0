use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    middleware::from_fn_with_state,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::app_state::AppState;
use crate::graphql::graph_schema::AppSchema;
use crate::middleware::auth::{jwt_middleware, AuthUser, JwtKeys};

const GRAPHQL_PATH: &str = "/graphql";

/// ✅ **GraphQL routes**
/// - ✅ `POST /graphql` executes operations
/// - ✅ `GET /graphql` serves GraphiQL (or GET-encoded operations when the UI is off)
/// - ❌ With `keys` set, nothing on the path runs before the JWT gate
pub fn graphql_routes(schema: AppSchema, keys: Option<Arc<JwtKeys>>, graphiql: bool) -> Router<AppState> {
    let method_router = if graphiql {
        get(graphiql_page).post(graphql_handler)
    } else {
        get(graphql_handler).post(graphql_handler)
    };

    let router = Router::new()
        .route(GRAPHQL_PATH, method_router)
        .layer(Extension(schema));

    match keys {
        Some(keys) => router.route_layer(from_fn_with_state(keys, jwt_middleware)),
        None => router,
    }
}

/// ✅ **GraphQL handler**: forwards the caller's identity into the request data
pub async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    user: Option<Extension<AuthUser>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut gql_request = req.into_inner();
    if let Some(Extension(user)) = user {
        gql_request = gql_request.data(user); // ✅ inject identity
    }
    schema.execute(gql_request).await.into()
}

async fn graphiql_page() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
