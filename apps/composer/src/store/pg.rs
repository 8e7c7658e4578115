//! Postgres-backed profile persistence.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::fields;

use super::{GeneratedUpdate, ProfileStore};

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn commit_generated(
        &self,
        profile_id: Uuid,
        update: &GeneratedUpdate,
    ) -> Result<(), AppError> {
        // Column names are the same field names carried in row images.
        let sql = format!(
            "UPDATE profiles \
             SET {} = $2, \
                 {} = $3, \
                 {} = $4, \
                 {} = $5 \
             WHERE id = $1",
            fields::GENERATED_RESUME,
            fields::GENERATED_RESUME_REDACTED,
            fields::GENERATED_RESUME_PDF,
            fields::RESUME_GENERATED_AT,
        );
        let result = sqlx::query(&sql)
            .bind(profile_id)
            .bind(&update.resume)
            .bind(&update.redacted)
            .bind(&update.pdf_key)
            .bind(update.generated_at)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("profile {profile_id}")));
        }

        info!("Persisted generated résumé for profile {profile_id}");
        Ok(())
    }
}
