use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::PortfolioItem;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioItemsError, GetPortfolioItemsUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

pub struct GetPortfolioItemsService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> GetPortfolioItemsService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPortfolioItemsUseCase for GetPortfolioItemsService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PortfolioItem>, GetPortfolioItemsError> {
        self.repository.find_all().await.map_err(|e| match e {
            PortfolioRepositoryError::DatabaseError(msg)
            | PortfolioRepositoryError::SerializationError(msg) => {
                GetPortfolioItemsError::RepositoryError(msg)
            }
            PortfolioRepositoryError::NotFound => GetPortfolioItemsError::RepositoryError(
                "unexpected not found while listing portfolio items".to_string(),
            ),
        })
    }
}
