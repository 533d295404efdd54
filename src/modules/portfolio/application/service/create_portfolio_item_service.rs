use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::portfolio::application::domain::entities::{
    optional_text, required_text, ImageDescriptor, PortfolioItem, PortfolioValidationError,
};
use crate::modules::portfolio::application::domain::policies::UploadPolicy;
use crate::modules::portfolio::application::domain::reconciliation::plan_images;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioItemCommand, CreatePortfolioItemError, CreatePortfolioItemUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    MediaStore, NewPortfolioItemData, PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::application::service::image_transfer::{
    purge_sources, upload_planned,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreatePortfolioItemService<R, M>
where
    R: PortfolioRepository,
    M: MediaStore,
{
    repository: R,
    media_store: M,
    policy: UploadPolicy,
}

impl<R, M> CreatePortfolioItemService<R, M>
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

#[async_trait]
impl<R, M> CreatePortfolioItemUseCase for CreatePortfolioItemService<R, M>
where
    R: PortfolioRepository + Send + Sync,
    M: MediaStore + Send + Sync,
{
    async fn execute(
        &self,
        command: CreatePortfolioItemCommand,
    ) -> Result<PortfolioItem, CreatePortfolioItemError> {
        let title = required_text("title", command.title)?;
        let category = required_text("category", command.category)?;

        if command.uploads.is_empty() {
            return Err(PortfolioValidationError::NoImages.into());
        }
        self.policy.check_all(&command.uploads)?;

        let target = command.images.unwrap_or_else(|| {
            command
                .uploads
                .iter()
                .map(|_| ImageDescriptor::new_upload())
                .collect()
        });

        let plan = plan_images(&[], target, command.uploads.len());
        if plan.dropped() > 0 {
            warn!(
                dropped = plan.dropped(),
                "New image descriptors without a matching binary were dropped"
            );
        }

        let folder = self.policy.folder.as_str();
        let uploaded = upload_planned(&self.media_store, folder, &plan, &command.uploads)
            .await
            .map_err(|e| CreatePortfolioItemError::MediaUploadFailed(e.to_string()))?;

        let reconciled = plan.resolve(uploaded.clone());

        let data = NewPortfolioItemData {
            title,
            subtitle: optional_text(command.subtitle),
            description: optional_text(command.description),
            category,
            images: reconciled.images,
        };

        match self.repository.create(data).await {
            Ok(item) => {
                info!(
                    item_id = %item.id,
                    images = item.images.len(),
                    "Portfolio item created"
                );
                Ok(item)
            }
            Err(err) => {
                warn!(error = %err, compensating = uploaded.len(), "Failed to persist portfolio item");
                purge_sources(&self.media_store, folder, &uploaded).await;

                Err(match err {
                    PortfolioRepositoryError::DatabaseError(msg)
                    | PortfolioRepositoryError::SerializationError(msg) => {
                        CreatePortfolioItemError::RepositoryError(msg)
                    }
                    PortfolioRepositoryError::NotFound => CreatePortfolioItemError::RepositoryError(
                        "unexpected not found while creating portfolio item".to_string(),
                    ),
                })
            }
        }
    }
}
