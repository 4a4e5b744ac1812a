use sqlx::{PgConnection, PgPool};

use crate::dto::common::PageWindow;
use crate::dto::professor::AddProfessorRequest;
use crate::error::{Result, StorageError};
use crate::models::{NO_RATING, Professor};

const PROFESSOR_COLUMNS: &str = r#"
    professor_id, full_name, mail, phone, office, e_office, average_rating, created_at
"#;

/// Repository for Professor database operations
pub struct ProfessorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfessorRepository<'a> {
    /// Create a new ProfessorRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM professors")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// One page of professors ordered by id
    pub async fn list_page(&self, window: &PageWindow) -> Result<Vec<Professor>> {
        let professors = sqlx::query_as::<_, Professor>(&format!(
            r#"
            SELECT {PROFESSOR_COLUMNS}
            FROM professors
            ORDER BY professor_id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(window.take)
        .bind(window.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(professors)
    }

    /// Number of professors with at least one review
    pub async fn count_rated(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM professors WHERE average_rating <> $1",
        )
        .bind(NO_RATING)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// One page of reviewed professors, best rated first
    pub async fn list_rated_page(&self, window: &PageWindow) -> Result<Vec<Professor>> {
        let professors = sqlx::query_as::<_, Professor>(&format!(
            r#"
            SELECT {PROFESSOR_COLUMNS}
            FROM professors
            WHERE average_rating <> $1
            ORDER BY average_rating DESC, professor_id
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(NO_RATING)
        .bind(window.take)
        .bind(window.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(professors)
    }

    pub async fn list_ids(&self) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT professor_id FROM professors ORDER BY professor_id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Professor> {
        let professor = sqlx::query_as::<_, Professor>(&format!(
            "SELECT {PROFESSOR_COLUMNS} FROM professors WHERE professor_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Professor"))?;

        Ok(professor)
    }

    /// Create a new professor; the average starts at the no-rating sentinel
    pub async fn create(&self, req: &AddProfessorRequest) -> Result<Professor> {
        let professor = sqlx::query_as::<_, Professor>(&format!(
            r#"
            INSERT INTO professors (full_name, mail, phone, office, e_office, average_rating)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PROFESSOR_COLUMNS}
            "#
        ))
        .bind(&req.full_name)
        .bind(&req.mail)
        .bind(&req.phone)
        .bind(&req.office)
        .bind(&req.e_office)
        .bind(NO_RATING)
        .fetch_one(self.pool)
        .await?;

        Ok(professor)
    }

    /// Replace the descriptive fields of a professor. The rating aggregate is
    /// owned by the review lifecycle and is left untouched.
    pub async fn update(&self, id: i64, req: &AddProfessorRequest) -> Result<Professor> {
        let professor = sqlx::query_as::<_, Professor>(&format!(
            r#"
            UPDATE professors
            SET full_name = $2,
                mail = $3,
                phone = $4,
                office = $5,
                e_office = $6
            WHERE professor_id = $1
            RETURNING {PROFESSOR_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.full_name)
        .bind(&req.mail)
        .bind(&req.phone)
        .bind(&req.office)
        .bind(&req.e_office)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Professor"))?;

        Ok(professor)
    }

    /// Delete a professor; its reviews go with it
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM professors WHERE professor_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Professor"));
        }

        Ok(())
    }

    /// Load a professor and hold its row lock until the surrounding
    /// transaction ends.
    pub async fn lock(conn: &mut PgConnection, id: i64) -> Result<Professor> {
        let professor = sqlx::query_as::<_, Professor>(&format!(
            "SELECT {PROFESSOR_COLUMNS} FROM professors WHERE professor_id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(StorageError::NotFound("Professor"))?;

        Ok(professor)
    }

    pub async fn set_average_rating(conn: &mut PgConnection, id: i64, average: f64) -> Result<()> {
        let result = sqlx::query("UPDATE professors SET average_rating = $2 WHERE professor_id = $1")
            .bind(id)
            .bind(average)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Professor"));
        }

        Ok(())
    }
}
