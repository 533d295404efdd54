use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use actix_web::web::Bytes;
use google_cloud_storage::client::{Storage, StorageControl};

use crate::modules::portfolio::application::ports::outgoing::{MediaStore, MediaStoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcsConfig {
    pub bucket: String,
    /// Prefix of public object URLs, without trailing slash.
    pub public_base_url: String,
}

impl GcsConfig {
    pub fn new(bucket: impl Into<String>, public_base_url: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

fn object_name(folder: &str, identifier: &str) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        identifier.to_string()
    } else {
        format!("{}/{}", folder, identifier)
    }
}

/// google-cloud-storage addresses buckets as `projects/_/buckets/{bucket}`.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn is_not_found(msg: &str) -> bool {
    let m = msg.to_lowercase();
    m.contains("404") || m.contains("not found") || m.contains("no such object")
}

/// Internal seam so the adapter can be tested without google-cloud-storage types.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket: &str,
        object_name: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket: &str, object_name: &str) -> Result<(), String>;
}

/// Production adapter for the `MediaStore` port.
#[derive(Clone)]
pub struct GcsMediaStore {
    client: Arc<dyn GcsClient>,
    config: GcsConfig,
}

impl GcsMediaStore {
    /// Discovers credentials from the environment (`GOOGLE_APPLICATION_CREDENTIALS`,
    /// metadata server, ...) and builds the client.
    pub async fn connect(
        config: GcsConfig,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = RealGcsClient::new().await?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, config: GcsConfig) -> Self {
        Self { client, config }
    }

    fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.public_base_url, self.config.bucket, object_name
        )
    }
}

#[async_trait]
impl MediaStore for GcsMediaStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        folder: &str,
    ) -> Result<String, MediaStoreError> {
        let name = object_name(folder, &Uuid::new_v4().to_string());

        self.client
            .upload_object(&self.config.bucket, &name, bytes, content_type)
            .await
            .map_err(MediaStoreError::UploadFailed)?;

        tracing::debug!(bucket = %self.config.bucket, object = %name, "Object uploaded");

        Ok(self.public_url(&name))
    }

    async fn delete(&self, folder: &str, identifier: &str) -> Result<(), MediaStoreError> {
        let name = object_name(folder, identifier);

        match self
            .client
            .delete_object(&self.config.bucket, &name)
            .await
        {
            Ok(()) => Ok(()),
            Err(msg) if is_not_found(&msg) => {
                tracing::debug!(object = %name, "Object already gone");
                Ok(())
            }
            Err(msg) => Err(MediaStoreError::DeleteFailed(msg)),
        }
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: Storage,
    control: StorageControl,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = Storage::builder().build().await.map_err(|e| {
            tracing::error!("Failed to build GCS storage client: {:?}", e);
            e
        })?;

        let control = StorageControl::builder().build().await.map_err(|e| {
            tracing::error!("Failed to build GCS control client: {:?}", e);
            e
        })?;

        tracing::info!("GCS clients created");

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket: &str,
        object_name: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        self.storage
            .write_object(bucket_resource(bucket), object_name.to_string(), Bytes::from(data))
            .set_content_type(content_type.to_string())
            .send_buffered()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }

    async fn delete_object(&self, bucket: &str, object_name: &str) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource(bucket))
            .set_object(object_name.to_string())
            .send()
            .await
            .map_err(|e| e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
