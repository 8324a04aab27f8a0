use async_graphql::{EmptySubscription, Schema};

use crate::config::Config;
use crate::db::store::SharedStore;
use crate::graphql::graph::{MutationRoot, QueryRoot};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(store: SharedStore, config: &Config) -> AppSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(store);
    if !config.introspection_enabled {
        builder = builder.disable_introspection();
    }
    builder.finish()
}
