// src/modules/portfolio/application/ports/outgoing/portfolio_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::{PortfolioImage, PortfolioItem};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated content of a new item. Identity and timestamps are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPortfolioItemData {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub category: String,
    pub images: Vec<PortfolioImage>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Newest first.
    async fn find_all(&self) -> Result<Vec<PortfolioItem>, PortfolioRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<PortfolioItem, PortfolioRepositoryError>;

    async fn create(
        &self,
        data: NewPortfolioItemData,
    ) -> Result<PortfolioItem, PortfolioRepositoryError>;

    /// Full-document save. `created_at` is never written; `updated_at` is refreshed.
    async fn update(&self, item: PortfolioItem) -> Result<PortfolioItem, PortfolioRepositoryError>;

    /// Removes the item and returns the deleted snapshot.
    async fn delete(&self, id: Uuid) -> Result<PortfolioItem, PortfolioRepositoryError>;
}
