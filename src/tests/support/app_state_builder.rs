use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioItemUseCase, DeletePortfolioItemUseCase, GetPortfolioItemUseCase,
    GetPortfolioItemsUseCase, UpdatePortfolioItemUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases {
                get_list: Arc::new(StubGetPortfolioItemsUseCase::success(vec![])),
                get_single: Arc::new(StubGetPortfolioItemUseCase::not_found()),
                create: Arc::new(DefaultStubCreatePortfolioItemUseCase),
                update: Arc::new(DefaultStubUpdatePortfolioItemUseCase),
                delete: Arc::new(StubDeletePortfolioItemUseCase::not_found()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_list(
        mut self,
        uc: impl GetPortfolioItemsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single(
        mut self,
        uc: impl GetPortfolioItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_single = Arc::new(uc);
        self
    }

    pub fn with_create(
        mut self,
        uc: impl CreatePortfolioItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.create = Arc::new(uc);
        self
    }

    pub fn with_create_arc(mut self, uc: Arc<dyn CreatePortfolioItemUseCase + Send + Sync>) -> Self {
        self.portfolio.create = uc;
        self
    }

    pub fn with_update(
        mut self,
        uc: impl UpdatePortfolioItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.update = Arc::new(uc);
        self
    }

    pub fn with_update_arc(mut self, uc: Arc<dyn UpdatePortfolioItemUseCase + Send + Sync>) -> Self {
        self.portfolio.update = uc;
        self
    }

    pub fn with_delete(
        mut self,
        uc: impl DeletePortfolioItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.delete = Arc::new(uc);
        self
    }

    pub fn with_delete_arc(mut self, uc: Arc<dyn DeletePortfolioItemUseCase + Send + Sync>) -> Self {
        self.portfolio.delete = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
        })
    }
}
