mod create_portfolio_item;
mod delete_portfolio_item;
mod get_portfolio_item;
mod get_portfolio_items;
mod update_portfolio_item;

// Glob re-exports carry the `__path_*` types utoipa generates next to each handler.
pub use create_portfolio_item::*;
pub use delete_portfolio_item::*;
pub use get_portfolio_item::*;
pub use get_portfolio_items::*;
pub use update_portfolio_item::*;
