pub mod create_portfolio_item_service;
pub mod delete_portfolio_item_service;
pub mod get_portfolio_item_service;
pub mod get_portfolio_items_service;
pub mod image_transfer;
pub mod update_portfolio_item_service;

pub use create_portfolio_item_service::CreatePortfolioItemService;
pub use delete_portfolio_item_service::DeletePortfolioItemService;
pub use get_portfolio_item_service::GetPortfolioItemService;
pub use get_portfolio_items_service::GetPortfolioItemsService;
pub use update_portfolio_item_service::UpdatePortfolioItemService;
