//! Paged read views over reviews.

use sqlx::PgPool;

use crate::dto::common::{PaginatedResponse, PaginationParams};
use crate::dto::professor::ProfessorResponse;
use crate::dto::review::ReviewResponse;
use crate::error::{Result, StorageError};
use crate::repository::{professor::ProfessorRepository, review::ReviewRepository};

/// Reviewed professors, best average rating first. Professors still at the
/// no-rating sentinel are left out.
pub async fn list_rated_professors(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<ProfessorResponse>> {
    let repo = ProfessorRepository::new(pool);

    let total = repo.count_rated().await?;
    let window = pagination.window(total)?;
    let professors = repo.list_rated_page(&window).await?;

    Ok(
        PaginatedResponse::new(professors, pagination.page, &window, total)
            .map(ProfessorResponse::from),
    )
}

/// Reviews of one professor, oldest first.
///
/// An empty result is `NotFound`, reported before any page check.
pub async fn list_professor_reviews(
    pool: &PgPool,
    professor_id: i64,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<ReviewResponse>> {
    let repo = ReviewRepository::new(pool);

    let total = repo.count_for_professor(professor_id).await?;
    if total == 0 {
        tracing::warn!(professor_id, "No reviews found for professor");
        return Err(StorageError::NotFound("Reviews"));
    }

    let window = pagination.window(total)?;
    let reviews = repo.list_for_professor(professor_id, &window).await?;

    Ok(PaginatedResponse::new(reviews, pagination.page, &window, total))
}

/// Reviews written by one student, oldest first
pub async fn list_student_reviews(
    pool: &PgPool,
    apps_id: i64,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<ReviewResponse>> {
    let repo = ReviewRepository::new(pool);

    let total = repo.count_for_apps_id(apps_id).await?;
    if total == 0 {
        tracing::warn!(apps_id, "No reviews found for student");
        return Err(StorageError::NotFound("Reviews"));
    }

    let window = pagination.window(total)?;
    let reviews = repo.list_for_apps_id(apps_id, &window).await?;

    Ok(PaginatedResponse::new(reviews, pagination.page, &window, total))
}
