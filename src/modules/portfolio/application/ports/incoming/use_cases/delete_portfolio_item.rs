use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::PortfolioItem;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePortfolioItemError {
    #[error("Portfolio item not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Removes the item, then purges its images from the media store (best-effort).
#[async_trait]
pub trait DeletePortfolioItemUseCase: Send + Sync {
    async fn execute(&self, item_id: Uuid) -> Result<PortfolioItem, DeletePortfolioItemError>;
}
