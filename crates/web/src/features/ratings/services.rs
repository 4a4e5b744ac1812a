use sqlx::PgPool;
use storage::{error::Result, services::review_lifecycle};

/// Recompute every professor's stored average from its reviews
pub async fn recompute_all_ratings(pool: &PgPool) -> Result<u64> {
    review_lifecycle::recompute_all_ratings(pool).await
}
