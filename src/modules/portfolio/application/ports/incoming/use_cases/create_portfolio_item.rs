use async_trait::async_trait;
use std::fmt;

use crate::modules::portfolio::application::domain::entities::{
    ImageDescriptor, ImageUpload, PortfolioItem, PortfolioValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw create request. Text fields are validated by the service, not here.
#[derive(Debug, Clone, Default)]
pub struct CreatePortfolioItemCommand {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// `None` means one new image per upload, in upload order.
    pub images: Option<Vec<ImageDescriptor>>,
    pub uploads: Vec<ImageUpload>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreatePortfolioItemError {
    Validation(PortfolioValidationError),
    MediaUploadFailed(String),
    RepositoryError(String),
}

impl fmt::Display for CreatePortfolioItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatePortfolioItemError::Validation(err) => write!(f, "{}", err),
            CreatePortfolioItemError::MediaUploadFailed(msg) => {
                write!(f, "media upload failed: {}", msg)
            }
            CreatePortfolioItemError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

impl From<PortfolioValidationError> for CreatePortfolioItemError {
    fn from(err: PortfolioValidationError) -> Self {
        CreatePortfolioItemError::Validation(err)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePortfolioItemUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreatePortfolioItemCommand,
    ) -> Result<PortfolioItem, CreatePortfolioItemError>;
}
