use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioItemUseCase, DeletePortfolioItemUseCase, GetPortfolioItemUseCase,
    GetPortfolioItemsUseCase, UpdatePortfolioItemUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_list: Arc<dyn GetPortfolioItemsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetPortfolioItemUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePortfolioItemUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePortfolioItemUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioItemUseCase + Send + Sync>,
}
