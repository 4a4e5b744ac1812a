use chrono::NaiveDateTime;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::dto::common::PageWindow;
use crate::dto::review::ReviewResponse;
use crate::error::{Result, StorageError};
use crate::models::{NewReview, Review, ReviewRating};

const REVIEW_COLUMNS: &str = r#"
    review_id, professor_id, course_id, user_auth_id, rating,
    users_subject_score, comments, created_at
"#;

#[derive(FromRow)]
struct ReviewRow {
    review_id: i64,
    professor_id: i64,
    professor_full_name: String,
    course_id: i64,
    course_name: String,
    rating: i32,
    users_subject_score: f64,
    comments: Option<String>,
    created_at: NaiveDateTime,
}

impl From<ReviewRow> for ReviewResponse {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.review_id,
            professor_id: row.professor_id,
            professor_full_name: row.professor_full_name,
            course_id: row.course_id,
            course_name: row.course_name,
            rating: row.rating,
            users_subject_score: row.users_subject_score,
            comments: row.comments,
            created_at: row.created_at,
        }
    }
}

pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn count_for_professor(&self, professor_id: i64) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE professor_id = $1")
                .bind(professor_id)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// One page of a professor's reviews, oldest first
    pub async fn list_for_professor(
        &self,
        professor_id: i64,
        window: &PageWindow,
    ) -> Result<Vec<ReviewResponse>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT r.review_id, r.professor_id, p.full_name AS professor_full_name,
                   r.course_id, c.name AS course_name, r.rating,
                   r.users_subject_score, r.comments, r.created_at
            FROM reviews r
            INNER JOIN professors p ON r.professor_id = p.professor_id
            INNER JOIN courses c ON r.course_id = c.course_id
            WHERE r.professor_id = $1
            ORDER BY r.created_at, r.review_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(professor_id)
        .bind(window.take)
        .bind(window.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ReviewResponse::from).collect())
    }

    pub async fn count_for_apps_id(&self, apps_id: i64) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM reviews r
            INNER JOIN user_auths u ON r.user_auth_id = u.user_auth_id
            WHERE u.apps_id = $1
            "#,
        )
        .bind(apps_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// One page of the reviews written by a student, oldest first
    pub async fn list_for_apps_id(
        &self,
        apps_id: i64,
        window: &PageWindow,
    ) -> Result<Vec<ReviewResponse>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT r.review_id, r.professor_id, p.full_name AS professor_full_name,
                   r.course_id, c.name AS course_name, r.rating,
                   r.users_subject_score, r.comments, r.created_at
            FROM reviews r
            INNER JOIN user_auths u ON r.user_auth_id = u.user_auth_id
            INNER JOIN professors p ON r.professor_id = p.professor_id
            INNER JOIN courses c ON r.course_id = c.course_id
            WHERE u.apps_id = $1
            ORDER BY r.created_at, r.review_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(apps_id)
        .bind(window.take)
        .bind(window.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ReviewResponse::from).collect())
    }

    pub async fn find_by_id(conn: &mut PgConnection, review_id: i64) -> Result<Review> {
        let review = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE review_id = $1"
        ))
        .bind(review_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(StorageError::NotFound("Review"))?;

        Ok(review)
    }

    /// The full rating set of a professor
    pub async fn ratings_for_professor(
        conn: &mut PgConnection,
        professor_id: i64,
    ) -> Result<Vec<ReviewRating>> {
        let ratings = sqlx::query_as::<_, ReviewRating>(
            r#"
            SELECT review_id, user_auth_id, course_id, rating
            FROM reviews
            WHERE professor_id = $1
            ORDER BY review_id
            "#,
        )
        .bind(professor_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(ratings)
    }

    pub async fn insert(conn: &mut PgConnection, review: &NewReview) -> Result<Review> {
        let review = sqlx::query_as::<_, Review>(&format!(
            r#"
            INSERT INTO reviews (professor_id, course_id, user_auth_id, rating, users_subject_score, comments)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {REVIEW_COLUMNS}
            "#
        ))
        .bind(review.professor_id)
        .bind(review.course_id)
        .bind(review.user_auth_id)
        .bind(review.rating)
        .bind(review.users_subject_score)
        .bind(&review.comments)
        .fetch_one(&mut *conn)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::ConstraintViolation(
                    "User has already reviewed the professor and course".to_string(),
                )
            } else {
                e
            }
        })?;

        Ok(review)
    }

    pub async fn delete(conn: &mut PgConnection, review_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Review"));
        }

        Ok(())
    }
}
