use axum::{
    Router,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{
    add_review, list_professor_reviews, list_rated_professors, list_student_reviews,
    remove_review,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/AllProfessorsReviews", get(list_rated_professors))
        .route("/ProfessorsReviews", get(list_professor_reviews))
        .route("/StudentsReviews", get(list_student_reviews))
        .route("/Add", post(add_review))
        .route("/delete", delete(remove_review))
}
