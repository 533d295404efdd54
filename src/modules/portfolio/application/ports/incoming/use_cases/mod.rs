mod create_portfolio_item;
mod delete_portfolio_item;
mod get_portfolio_item;
mod get_portfolio_items;
mod update_portfolio_item;

pub use create_portfolio_item::{
    CreatePortfolioItemCommand, CreatePortfolioItemError, CreatePortfolioItemUseCase,
};
pub use delete_portfolio_item::{DeletePortfolioItemError, DeletePortfolioItemUseCase};
pub use get_portfolio_item::{GetPortfolioItemError, GetPortfolioItemUseCase};
pub use get_portfolio_items::{GetPortfolioItemsError, GetPortfolioItemsUseCase};
pub use update_portfolio_item::{
    UpdatePortfolioItemCommand, UpdatePortfolioItemError, UpdatePortfolioItemUseCase,
};
