use axum::{Router, middleware, routing::post};
use storage::Database;

use super::handlers::recompute_all_ratings;
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn admin_routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/recompute", post(recompute_all_ratings))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
