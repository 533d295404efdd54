pub mod media_store;
pub mod portfolio_repository;

pub use media_store::{MediaStore, MediaStoreError};
pub use portfolio_repository::{
    NewPortfolioItemData, PortfolioRepository, PortfolioRepositoryError,
};
