//! Creation and removal of reviews.
//!
//! Each operation runs in one transaction: the professor row is locked, its
//! full review set is loaded, the set is mutated in memory, the average is
//! recomputed from the result, and the review row and the new average are
//! written before commit. Dropping the transaction on any error (or on
//! request cancellation) rolls everything back.

use sqlx::PgPool;

use crate::dto::review::AddReviewRequest;
use crate::error::{Result, StorageError};
use crate::models::{NewReview, Review, ReviewRating};
use crate::repository::{
    course::CourseRepository, professor::ProfessorRepository, review::ReviewRepository,
};
use crate::services::caller::CallerResolver;
use crate::services::rating_aggregation::ProfessorRatings;

/// Validate, authenticate and store a new review, updating the professor's
/// average in the same transaction.
pub async fn add_review(
    pool: &PgPool,
    resolver: &dyn CallerResolver,
    request: &AddReviewRequest,
) -> Result<Review> {
    let submission = request.submission()?;

    let caller = resolver.resolve_caller(&submission.credentials).await?;

    let mut tx = pool.begin().await?;

    let course = CourseRepository::find_in(&mut tx, submission.course_id)
        .await
        .inspect_err(|e| log_missing(e, submission.course_id))?;

    let professor = ProfessorRepository::lock(&mut tx, submission.professor_id)
        .await
        .inspect_err(|e| log_missing(e, submission.professor_id))?;

    let mut ratings = ProfessorRatings::new(
        professor.professor_id,
        ReviewRepository::ratings_for_professor(&mut tx, professor.professor_id).await?,
    );

    ratings.ensure_not_reviewed(caller.user_auth_id, course.course_id)?;

    let review = ReviewRepository::insert(
        &mut tx,
        &NewReview {
            professor_id: professor.professor_id,
            course_id: course.course_id,
            user_auth_id: caller.user_auth_id,
            rating: submission.rating,
            users_subject_score: submission.users_subject_score,
            comments: submission.comments,
        },
    )
    .await?;

    let average = ratings.insert(ReviewRating::from(&review));
    ProfessorRepository::set_average_rating(&mut tx, ratings.professor_id(), average).await?;

    tx.commit().await?;

    tracing::info!(
        review_id = review.review_id,
        professor_id = professor.professor_id,
        course_id = course.course_id,
        average_rating = average,
        "Created review"
    );

    Ok(review)
}

/// Delete a review and recompute its professor's average from the
/// remaining reviews.
pub async fn remove_review(pool: &PgPool, review_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let review = ReviewRepository::find_by_id(&mut tx, review_id)
        .await
        .inspect_err(|e| log_missing(e, review_id))?;

    let professor = ProfessorRepository::lock(&mut tx, review.professor_id).await?;

    // Reloaded under the lock: a concurrent removal may have committed since
    // the lookup above, in which case the review is gone from this set.
    let mut ratings = ProfessorRatings::new(
        professor.professor_id,
        ReviewRepository::ratings_for_professor(&mut tx, professor.professor_id).await?,
    );

    let average = ratings
        .remove(review.review_id)
        .inspect_err(|e| log_missing(e, review_id))?;

    ReviewRepository::delete(&mut tx, review.review_id).await?;
    ProfessorRepository::set_average_rating(&mut tx, ratings.professor_id(), average).await?;

    tx.commit().await?;

    tracing::info!(
        review_id,
        professor_id = professor.professor_id,
        average_rating = average,
        "Deleted review"
    );

    Ok(())
}

/// Recompute the stored average of every professor from its reviews.
///
/// Returns the number of professors processed. Professors deleted while the
/// pass runs are skipped.
pub async fn recompute_all_ratings(pool: &PgPool) -> Result<u64> {
    let professor_ids = ProfessorRepository::new(pool).list_ids().await?;

    let mut count = 0u64;

    for professor_id in professor_ids {
        let mut tx = pool.begin().await?;

        match ProfessorRepository::lock(&mut tx, professor_id).await {
            Ok(_) => {}
            Err(StorageError::NotFound(_)) => continue,
            Err(e) => return Err(e),
        }

        let ratings = ProfessorRatings::new(
            professor_id,
            ReviewRepository::ratings_for_professor(&mut tx, professor_id).await?,
        );

        ProfessorRepository::set_average_rating(&mut tx, professor_id, ratings.average()).await?;
        tx.commit().await?;

        count += 1;
    }

    tracing::info!(count, "Recomputed professor ratings");

    Ok(count)
}

fn log_missing(error: &StorageError, id: i64) {
    if let StorageError::NotFound(entity) = error {
        tracing::warn!(id, "No {} with id {} found in database", entity, id);
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::services::caller::{CallerCredentials, CallerIdentity};

    struct RejectAll;

    #[async_trait]
    impl CallerResolver for RejectAll {
        async fn resolve_caller(&self, _: &CallerCredentials) -> Result<CallerIdentity> {
            Err(StorageError::Unauthorized)
        }
    }

    fn unreachable_pool() -> PgPool {
        PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(50))
            .connect_lazy("postgres://nobody@127.0.0.1:1/none")
            .unwrap()
    }

    fn request() -> AddReviewRequest {
        AddReviewRequest {
            apps_id: Some(5),
            token: Some("token".to_string()),
            course_id: Some(1),
            professor_id: Some(1),
            rating: Some(3),
            users_subject_score: Some(7.0),
            comments: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_request_rejected_before_store() {
        let pool = unreachable_pool();
        let req = AddReviewRequest {
            rating: Some(0),
            ..request()
        };

        let err = add_review(&pool, &RejectAll, &req).await.unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unknown_caller_rejected_before_store() {
        let pool = unreachable_pool();

        let err = add_review(&pool, &RejectAll, &request()).await.unwrap_err();
        assert!(matches!(err, StorageError::Unauthorized));
    }
}
