use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::PortfolioItem;
use crate::modules::portfolio::application::domain::reconciliation::removed_sources;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioItemError, DeletePortfolioItemUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    MediaStore, PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::application::service::image_transfer::purge_sources;

pub struct DeletePortfolioItemService<R, M>
where
    R: PortfolioRepository,
    M: MediaStore,
{
    repository: R,
    media_store: M,
    folder: String,
}

impl<R, M> DeletePortfolioItemService<R, M>
where
    R: PortfolioRepository,
    M: MediaStore,
{
    pub fn new(repository: R, media_store: M, folder: impl Into<String>) -> Self {
        Self {
            repository,
            media_store,
            folder: folder.into(),
        }
    }
}

#[async_trait]
impl<R, M> DeletePortfolioItemUseCase for DeletePortfolioItemService<R, M>
where
    R: PortfolioRepository + Send + Sync,
    M: MediaStore + Send + Sync,
{
    async fn execute(&self, item_id: Uuid) -> Result<PortfolioItem, DeletePortfolioItemError> {
        let deleted = self
            .repository
            .delete(item_id)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => DeletePortfolioItemError::NotFound,
                PortfolioRepositoryError::DatabaseError(msg)
                | PortfolioRepositoryError::SerializationError(msg) => {
                    DeletePortfolioItemError::RepositoryError(msg)
                }
            })?;

        let stored = removed_sources(&deleted.images, &[]);
        purge_sources(&self.media_store, &self.folder, &stored).await;

        info!(item_id = %deleted.id, images = stored.len(), "Portfolio item deleted");

        Ok(deleted)
    }
}
