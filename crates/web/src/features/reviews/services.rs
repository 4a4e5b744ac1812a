use sqlx::PgPool;
use storage::{
    dto::{
        common::{PaginatedResponse, PaginationParams},
        professor::ProfessorResponse,
        review::{AddReviewRequest, ReviewResponse},
    },
    error::Result,
    models::Review,
    services::{caller::UserAuthResolver, review_lifecycle, review_listing},
};

/// Reviewed professors, best average rating first
pub async fn list_rated_professors(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<ProfessorResponse>> {
    review_listing::list_rated_professors(pool, pagination).await
}

/// Reviews of one professor, oldest first
pub async fn list_professor_reviews(
    pool: &PgPool,
    professor_id: i64,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<ReviewResponse>> {
    review_listing::list_professor_reviews(pool, professor_id, pagination).await
}

/// Reviews written by one student, oldest first
pub async fn list_student_reviews(
    pool: &PgPool,
    apps_id: i64,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<ReviewResponse>> {
    review_listing::list_student_reviews(pool, apps_id, pagination).await
}

/// Submit a review on behalf of the caller named in the request
pub async fn add_review(pool: &PgPool, request: &AddReviewRequest) -> Result<Review> {
    let resolver = UserAuthResolver::new(pool);
    review_lifecycle::add_review(pool, &resolver, request).await
}

/// Delete a review
pub async fn remove_review(pool: &PgPool, review_id: i64) -> Result<()> {
    review_lifecycle::remove_review(pool, review_id).await
}
