//! S3-backed storage for rendered PDF artifacts.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

use super::ArtifactStore;

pub struct S3ArtifactStore {
    client: S3Client,
    bucket: String,
}

impl S3ArtifactStore {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn put_pdf(&self, profile_id: Uuid, bytes: Bytes) -> Result<String, AppError> {
        let key = format!("resumes/{profile_id}/resume.pdf");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type("application/pdf")
            .send()
            .await
            .map_err(|e| AppError::S3(format!("PDF upload failed: {e}")))?;

        info!("Uploaded rendered résumé to s3://{}/{}", self.bucket, key);
        Ok(key)
    }
}
