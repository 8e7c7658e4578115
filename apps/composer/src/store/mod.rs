//! Persistence seams for composed documents.
//!
//! Both traits are carried in `AppState` as trait objects so handlers and
//! tests can swap backends without touching the pipeline.

mod pg;
mod s3;

pub use pg::PgProfileStore;
pub use s3::S3ArtifactStore;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;

/// Derived fields committed to a profile row in one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUpdate {
    pub resume: String,
    pub redacted: String,
    /// Artifact key of the rendered PDF, or `None` to clear a stale pointer
    /// when rendering failed or is disabled.
    pub pdf_key: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Write access to profile rows.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Commits all derived fields in a single write. The text fields and the
    /// artifact pointer land together or not at all.
    async fn commit_generated(
        &self,
        profile_id: Uuid,
        update: &GeneratedUpdate,
    ) -> Result<(), AppError>;
}

/// Storage for rendered binary artifacts.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Stores the rendered PDF and returns its artifact key.
    async fn put_pdf(&self, profile_id: Uuid, bytes: Bytes) -> Result<String, AppError>;
}
