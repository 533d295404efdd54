use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::{PortfolioImage, PortfolioItem};

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioImageResponse {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItemResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub images: Vec<PortfolioImageResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PortfolioImage> for PortfolioImageResponse {
    fn from(image: PortfolioImage) -> Self {
        Self {
            source: image.source,
            description: image.description,
            alt_text: image.alt_text,
        }
    }
}

impl From<PortfolioItem> for PortfolioItemResponse {
    fn from(item: PortfolioItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            subtitle: item.subtitle,
            description: item.description,
            category: item.category,
            images: item.images.into_iter().map(Into::into).collect(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
