//! Media store I/O shared by the mutating services.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::modules::portfolio::application::domain::entities::ImageUpload;
use crate::modules::portfolio::application::domain::media_identifier::media_identifier;
use crate::modules::portfolio::application::domain::reconciliation::ImagePlan;
use crate::modules::portfolio::application::ports::outgoing::{MediaStore, MediaStoreError};

/// Uploads the binaries `plan` consumes, strictly one after another, in descriptor order.
///
/// On failure the images already uploaded by this call are purged before returning.
pub async fn upload_planned<M>(
    media_store: &M,
    folder: &str,
    plan: &ImagePlan,
    uploads: &[ImageUpload],
) -> Result<Vec<String>, MediaStoreError>
where
    M: MediaStore + ?Sized,
{
    let mut uploaded = Vec::with_capacity(plan.upload_count());

    for binary_index in plan.uploads() {
        let Some(upload) = uploads.get(binary_index) else {
            purge_sources(media_store, folder, &uploaded).await;
            return Err(MediaStoreError::UploadFailed(format!(
                "no binary at index {}",
                binary_index
            )));
        };

        match media_store
            .upload(upload.bytes.clone(), &upload.content_type, folder)
            .await
        {
            Ok(url) => {
                debug!(binary_index, url = %url, "Image uploaded");
                uploaded.push(url);
            }
            Err(err) => {
                warn!(
                    binary_index,
                    error = %err,
                    compensating = uploaded.len(),
                    "Image upload failed"
                );
                purge_sources(media_store, folder, &uploaded).await;
                return Err(err);
            }
        }
    }

    Ok(uploaded)
}

/// Best-effort removal of stored images. Never fails; problems are logged.
///
/// Sources with no derivable identifier are skipped. Deletes run concurrently.
pub async fn purge_sources<M>(media_store: &M, folder: &str, sources: &[String])
where
    M: MediaStore + ?Sized,
{
    let deletes = sources.iter().filter_map(|source| {
        let Some(identifier) = media_identifier(source) else {
            debug!(source = %source, "No media identifier, skipping delete");
            return None;
        };

        Some(async move {
            if let Err(err) = media_store.delete(folder, &identifier).await {
                warn!(
                    source = %source,
                    identifier = %identifier,
                    error = %err,
                    "Failed to delete image from media store"
                );
            }
        })
    });

    join_all(deletes).await;
}
