use sqlx::FromRow;

/// A student's review of a professor for one course.
///
/// `professor_id`, `course_id` and `user_auth_id` are fixed at creation;
/// there is no update path for reviews.
#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub review_id: i64,
    pub professor_id: i64,
    pub course_id: i64,
    pub user_auth_id: i64,
    pub rating: i32,
    pub users_subject_score: f64,
    pub comments: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

/// The slice of a review the rating aggregate depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct ReviewRating {
    pub review_id: i64,
    pub user_auth_id: i64,
    pub course_id: i64,
    pub rating: i32,
}

impl From<&Review> for ReviewRating {
    fn from(review: &Review) -> Self {
        Self {
            review_id: review.review_id,
            user_auth_id: review.user_auth_id,
            course_id: review.course_id,
            rating: review.rating,
        }
    }
}

/// Values for a review about to be inserted
#[derive(Debug, Clone)]
pub struct NewReview {
    pub professor_id: i64,
    pub course_id: i64,
    pub user_auth_id: i64,
    pub rating: i32,
    pub users_subject_score: f64,
    pub comments: Option<String>,
}
