use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::{
    non_empty_text, optional_text, ImageDescriptor, PortfolioItem,
};
use crate::modules::portfolio::application::domain::policies::UploadPolicy;
use crate::modules::portfolio::application::domain::reconciliation::plan_images;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    UpdatePortfolioItemCommand, UpdatePortfolioItemError, UpdatePortfolioItemUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    MediaStore, PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::application::service::image_transfer::{
    purge_sources, upload_planned,
};

pub struct UpdatePortfolioItemService<R, M>
where
    R: PortfolioRepository,
    M: MediaStore,
{
    repository: R,
    media_store: M,
    policy: UploadPolicy,
}

impl<R, M> UpdatePortfolioItemService<R, M>
where
    R: PortfolioRepository,
    M: MediaStore,
{
    pub fn new(repository: R, media_store: M, policy: UploadPolicy) -> Self {
        Self {
            repository,
            media_store,
            policy,
        }
    }
}

fn map_repository_error(err: PortfolioRepositoryError) -> UpdatePortfolioItemError {
    match err {
        PortfolioRepositoryError::NotFound => UpdatePortfolioItemError::NotFound,
        PortfolioRepositoryError::DatabaseError(msg)
        | PortfolioRepositoryError::SerializationError(msg) => {
            UpdatePortfolioItemError::RepositoryError(msg)
        }
    }
}

#[async_trait]
impl<R, M> UpdatePortfolioItemUseCase for UpdatePortfolioItemService<R, M>
where
    R: PortfolioRepository + Send + Sync,
    M: MediaStore + Send + Sync,
{
    async fn execute(
        &self,
        item_id: Uuid,
        command: UpdatePortfolioItemCommand,
    ) -> Result<PortfolioItem, UpdatePortfolioItemError> {
        let title = command
            .title
            .map(|v| non_empty_text("title", v))
            .transpose()?;
        let category = command
            .category
            .map(|v| non_empty_text("category", v))
            .transpose()?;
        self.policy.check_all(&command.uploads)?;

        let existing = self
            .repository
            .find_by_id(item_id)
            .await
            .map_err(map_repository_error)?;

        let target = command.images.unwrap_or_else(|| {
            existing
                .images
                .iter()
                .cloned()
                .map(ImageDescriptor::kept)
                .chain(command.uploads.iter().map(|_| ImageDescriptor::new_upload()))
                .collect()
        });

        let plan = plan_images(&existing.images, target, command.uploads.len());
        if plan.dropped() > 0 {
            warn!(
                item_id = %item_id,
                dropped = plan.dropped(),
                "New image descriptors without a matching binary were dropped"
            );
        }

        let folder = self.policy.folder.as_str();
        let uploaded = upload_planned(&self.media_store, folder, &plan, &command.uploads)
            .await
            .map_err(|e| UpdatePortfolioItemError::MediaUploadFailed(e.to_string()))?;

        let reconciled = plan.resolve(uploaded.clone());

        let PortfolioItem {
            id,
            title: old_title,
            subtitle: old_subtitle,
            description: old_description,
            category: old_category,
            created_at,
            updated_at,
            ..
        } = existing;

        let changed = PortfolioItem {
            id,
            title: title.unwrap_or(old_title),
            subtitle: match command.subtitle {
                Some(value) => optional_text(Some(value)),
                None => old_subtitle,
            },
            description: match command.description {
                Some(value) => optional_text(Some(value)),
                None => old_description,
            },
            category: category.unwrap_or(old_category),
            images: reconciled.images,
            created_at,
            updated_at,
        };

        let saved = match self.repository.update(changed).await {
            Ok(saved) => saved,
            Err(err) => {
                warn!(item_id = %item_id, error = %err, compensating = uploaded.len(), "Failed to persist portfolio item");
                purge_sources(&self.media_store, folder, &uploaded).await;
                return Err(map_repository_error(err));
            }
        };

        purge_sources(&self.media_store, folder, &reconciled.removed).await;

        info!(
            item_id = %saved.id,
            uploaded = uploaded.len(),
            removed = reconciled.removed.len(),
            "Portfolio item updated"
        );

        Ok(saved)
    }
}
