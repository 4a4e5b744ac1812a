use sqlx::PgPool;

use crate::error::Result;
use crate::models::UserAuth;

pub struct UserAuthRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserAuthRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The record matching both the application identity and its token
    pub async fn find_by_credentials(&self, apps_id: i64, token: &str) -> Result<Option<UserAuth>> {
        let user_auth = sqlx::query_as::<_, UserAuth>(
            r#"
            SELECT user_auth_id, apps_id, token, created_at
            FROM user_auths
            WHERE apps_id = $1 AND token = $2
            "#,
        )
        .bind(apps_id)
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(user_auth)
    }
}
