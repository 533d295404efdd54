mod media_store_gcs;
mod portfolio_repository_postgres;
pub mod sea_orm_entity;

pub use media_store_gcs::{GcsConfig, GcsMediaStore};
pub use portfolio_repository_postgres::PortfolioRepositoryPostgres;
