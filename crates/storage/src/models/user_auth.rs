use sqlx::FromRow;

/// Maps an external application identity (`apps_id`) plus token to an
/// internal user record.
#[derive(Debug, Clone, FromRow)]
pub struct UserAuth {
    pub user_auth_id: i64,
    pub apps_id: i64,
    pub token: String,
    pub created_at: chrono::NaiveDateTime,
}
