use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_professor, delete_professor, get_professor, list_professors, update_professor,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/",
            get(list_professors)
                .post(create_professor)
                .delete(delete_professor),
        )
        .route("/:id", get(get_professor).put(update_professor))
}
