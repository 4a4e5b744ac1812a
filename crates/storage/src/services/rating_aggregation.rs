//! Maintenance of the denormalized `professors.average_rating` column.
//!
//! The average is recomputed from the complete review set of a professor
//! every time that set changes, inside the same transaction as the change.

use crate::error::{Result, StorageError};
use crate::models::{NO_RATING, ReviewRating};

/// Mean rating of `reviews`, or [`NO_RATING`] for an empty set.
pub fn recompute_average(reviews: &[ReviewRating]) -> f64 {
    if reviews.is_empty() {
        return NO_RATING;
    }

    let sum: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
    let average = sum as f64 / reviews.len() as f64;

    if average.is_finite() {
        average
    } else {
        NO_RATING
    }
}

/// In-memory review set of a single professor.
///
/// Mutations return the average of the set as it stands afterwards, which is
/// the value to persist alongside the mutation.
#[derive(Debug, Clone)]
pub struct ProfessorRatings {
    professor_id: i64,
    reviews: Vec<ReviewRating>,
}

impl ProfessorRatings {
    pub fn new(professor_id: i64, reviews: Vec<ReviewRating>) -> Self {
        Self {
            professor_id,
            reviews,
        }
    }

    pub fn professor_id(&self) -> i64 {
        self.professor_id
    }

    pub fn reviews(&self) -> &[ReviewRating] {
        &self.reviews
    }

    pub fn average(&self) -> f64 {
        recompute_average(&self.reviews)
    }

    /// Fails with a constraint violation if the user already reviewed this
    /// professor for `course_id`.
    pub fn ensure_not_reviewed(&self, user_auth_id: i64, course_id: i64) -> Result<()> {
        let duplicate = self
            .reviews
            .iter()
            .any(|r| r.user_auth_id == user_auth_id && r.course_id == course_id);

        if duplicate {
            return Err(StorageError::ConstraintViolation(
                "User has already reviewed the professor and course".to_string(),
            ));
        }

        Ok(())
    }

    pub fn insert(&mut self, review: ReviewRating) -> f64 {
        self.reviews.push(review);
        self.average()
    }

    pub fn remove(&mut self, review_id: i64) -> Result<f64> {
        let position = self
            .reviews
            .iter()
            .position(|r| r.review_id == review_id)
            .ok_or(StorageError::NotFound("Review"))?;

        self.reviews.remove(position);
        Ok(self.average())
    }
}
