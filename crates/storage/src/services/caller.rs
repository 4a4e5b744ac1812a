use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::repository::user_auth::UserAuthRepository;

/// Credentials a client presents when submitting a review
#[derive(Debug, Clone)]
pub struct CallerCredentials {
    pub apps_id: i64,
    pub token: String,
}

/// The resolved author of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_auth_id: i64,
    pub apps_id: i64,
}

/// Turns presented credentials into a caller identity.
///
/// The review lifecycle only depends on this trait, so the credential scheme
/// can change without touching it.
#[async_trait]
pub trait CallerResolver: Send + Sync {
    async fn resolve_caller(&self, credentials: &CallerCredentials) -> Result<CallerIdentity>;
}

/// Resolves callers against the `user_auths` table by `(apps_id, token)`
pub struct UserAuthResolver<'a> {
    pool: &'a PgPool,
}

impl<'a> UserAuthResolver<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CallerResolver for UserAuthResolver<'_> {
    async fn resolve_caller(&self, credentials: &CallerCredentials) -> Result<CallerIdentity> {
        let repo = UserAuthRepository::new(self.pool);
        let user_auth = repo
            .find_by_credentials(credentials.apps_id, &credentials.token)
            .await?
            .ok_or_else(|| {
                tracing::warn!(apps_id = credentials.apps_id, "Rejected caller credentials");
                StorageError::Unauthorized
            })?;

        Ok(CallerIdentity {
            user_auth_id: user_auth.user_auth_id,
            apps_id: user_auth.apps_id,
        })
    }
}
