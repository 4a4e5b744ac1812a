pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod openapi;

use std::time::Duration;

use axum::Router;
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use features::{courses, professors, ratings, reviews};
use middleware::auth::ApiKeys;
use openapi::ApiDoc;

/// Build the full application router
pub fn app(db: Database, api_keys: ApiKeys) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .nest("/api/professor", professors::routes::routes())
        .nest("/api/course", courses::routes::routes())
        .nest("/api/admin/ratings", ratings::routes::admin_routes(api_keys))
        .nest("/review", reviews::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}
