use super::backend::StorageBackend;
use crate::config::S3Config;
use crate::error::{BackupError, Result};
use async_trait::async_trait;
use aws_sdk_s3 as s3;
use s3::config::{BehaviorVersion, Credentials, Region};
use s3::primitives::ByteStream;
use tracing::debug;

pub struct S3Backend {
    client: s3::Client,
    bucket: String,
}

impl S3Backend {
    pub async fn new(config: &S3Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(Credentials::new(
                &config.access_key_id,
                &config.secret_access_key,
                None,
                None,
                "Static",
            ))
            .load()
            .await;

        Self {
            client: s3::Client::new(&sdk_config),
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl StorageBackend for S3Backend {
    async fn upload(&self, filename: &str, content: &[u8]) -> Result<()> {
        debug!("Putting {} into bucket {}", filename, self.bucket);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(filename)
            .body(ByteStream::from(content.to_vec()))
            .send()
            .await
            .map_err(|e| {
                BackupError::Upload(format!("S3 put_object for {} failed: {}", filename, e))
            })?;
        Ok(())
    }

    async fn list_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| {
                BackupError::Storage(format!("S3 list_objects failed: {}", e))
            })?;
            files.extend(
                page.contents()
                    .iter()
                    .filter_map(|obj| obj.key().map(str::to_string)),
            );
        }

        Ok(files)
    }

    async fn delete(&self, filename: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(filename)
            .send()
            .await
            .map_err(|e| {
                BackupError::Storage(format!("S3 delete_object for {} failed: {}", filename, e))
            })?;
        Ok(())
    }

    async fn download(&self, filename: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(filename)
            .send()
            .await
            .map_err(|e| {
                BackupError::Storage(format!("S3 get_object for {} failed: {}", filename, e))
            })?;

        let data = resp.body.collect().await.map_err(|e| {
            BackupError::Storage(format!("error reading S3 body for {}: {}", filename, e))
        })?;
        Ok(data.into_bytes().to_vec())
    }

    fn name(&self) -> &'static str {
        "S3"
    }
}
