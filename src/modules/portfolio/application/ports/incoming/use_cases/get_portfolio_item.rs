use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::PortfolioItem;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioItemError {
    #[error("Portfolio item not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPortfolioItemUseCase: Send + Sync {
    async fn execute(&self, item_id: Uuid) -> Result<PortfolioItem, GetPortfolioItemError>;
}
