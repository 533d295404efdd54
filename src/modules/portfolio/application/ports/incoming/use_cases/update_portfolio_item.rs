use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::{
    ImageDescriptor, ImageUpload, PortfolioItem, PortfolioValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Every field is optional; `None` keeps the stored value.
///
/// A blank `subtitle` or `description` clears the field. A blank `title` or `category`
/// is rejected.
#[derive(Debug, Clone, Default)]
pub struct UpdatePortfolioItemCommand {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// `None` keeps the stored images and appends one new image per upload.
    pub images: Option<Vec<ImageDescriptor>>,
    pub uploads: Vec<ImageUpload>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum UpdatePortfolioItemError {
    NotFound,
    Validation(PortfolioValidationError),
    MediaUploadFailed(String),
    RepositoryError(String),
}

impl fmt::Display for UpdatePortfolioItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdatePortfolioItemError::NotFound => write!(f, "portfolio item not found"),
            UpdatePortfolioItemError::Validation(err) => write!(f, "{}", err),
            UpdatePortfolioItemError::MediaUploadFailed(msg) => {
                write!(f, "media upload failed: {}", msg)
            }
            UpdatePortfolioItemError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

impl From<PortfolioValidationError> for UpdatePortfolioItemError {
    fn from(err: PortfolioValidationError) -> Self {
        UpdatePortfolioItemError::Validation(err)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdatePortfolioItemUseCase: Send + Sync {
    async fn execute(
        &self,
        item_id: Uuid,
        command: UpdatePortfolioItemCommand,
    ) -> Result<PortfolioItem, UpdatePortfolioItemError>;
}
