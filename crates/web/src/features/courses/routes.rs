use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_course, get_course, list_courses};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/:id", get(get_course))
}
