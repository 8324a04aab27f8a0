pub mod graphql;
pub mod health;

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::config::ConfigError;
use crate::graphql::graph_schema::AppSchema;
use crate::middleware::auth::JwtKeys;

/// Assemble the full application: health routes plus the (gated) GraphQL endpoint.
pub fn build_router(state: AppState, schema: AppSchema) -> Result<Router, ConfigError> {
    let config = state.config.clone();

    let keys = if config.auth_disabled {
        tracing::warn!("AUTH_DISABLED is set; /graphql accepts unauthenticated requests");
        None
    } else {
        let secret = config
            .jwt_secret
            .as_deref()
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;
        Some(Arc::new(JwtKeys::from_secret(secret.as_bytes())))
    };

    Ok(Router::new()
        .merge(health::health_routes())
        .merge(graphql::graphql_routes(schema, keys, config.graphiql_enabled))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state))
}
