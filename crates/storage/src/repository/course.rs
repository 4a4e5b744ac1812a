use sqlx::{PgConnection, PgPool};

use crate::dto::common::PageWindow;
use crate::dto::course::CreateCourseRequest;
use crate::error::{Result, StorageError};
use crate::models::Course;

pub struct CourseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CourseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    pub async fn list_page(&self, window: &PageWindow) -> Result<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT course_id, name, course_type, created_at
            FROM courses
            ORDER BY course_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(window.take)
        .bind(window.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(courses)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Course> {
        let mut conn = self.pool.acquire().await?;
        Self::find_in(&mut conn, id).await
    }

    /// Look a course up on an existing connection, e.g. inside a transaction
    pub async fn find_in(conn: &mut PgConnection, id: i64) -> Result<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT course_id, name, course_type, created_at
            FROM courses
            WHERE course_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(StorageError::NotFound("Course"))?;

        Ok(course)
    }

    pub async fn create(&self, req: &CreateCourseRequest) -> Result<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (name, course_type)
            VALUES ($1, $2)
            RETURNING course_id, name, course_type, created_at
            "#,
        )
        .bind(&req.name)
        .bind(req.course_type)
        .fetch_one(self.pool)
        .await?;

        Ok(course)
    }
}
