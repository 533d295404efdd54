pub mod portfolio_items;
