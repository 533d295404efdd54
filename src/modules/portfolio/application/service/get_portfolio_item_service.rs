use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::PortfolioItem;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioItemError, GetPortfolioItemUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

pub struct GetPortfolioItemService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> GetPortfolioItemService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPortfolioItemUseCase for GetPortfolioItemService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, item_id: Uuid) -> Result<PortfolioItem, GetPortfolioItemError> {
        self.repository
            .find_by_id(item_id)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => GetPortfolioItemError::NotFound,
                PortfolioRepositoryError::DatabaseError(msg)
                | PortfolioRepositoryError::SerializationError(msg) => {
                    GetPortfolioItemError::RepositoryError(msg)
                }
            })
    }
}
