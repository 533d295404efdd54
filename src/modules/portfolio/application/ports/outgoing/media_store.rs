// src/modules/portfolio/application/ports/outgoing/media_store.rs

use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaStoreError {
    #[error("Media upload failed: {0}")]
    UploadFailed(String),

    #[error("Media delete failed: {0}")]
    DeleteFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// External image hosting.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores `bytes` under `folder` and returns the public URL of the new object.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        folder: &str,
    ) -> Result<String, MediaStoreError>;

    /// Removes `folder/identifier`. Callers treat failures as best-effort.
    async fn delete(&self, folder: &str, identifier: &str) -> Result<(), MediaStoreError>;
}
