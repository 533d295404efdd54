use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
    Unchanged,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolio_items::{
    self, ActiveModel, Column, Entity, StoredImage,
};
use crate::modules::portfolio::application::domain::entities::{PortfolioImage, PortfolioItem};
use crate::modules::portfolio::application::ports::outgoing::{
    NewPortfolioItemData, PortfolioRepository, PortfolioRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<PortfolioItem>, PortfolioRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_item).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<PortfolioItem, PortfolioRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PortfolioRepositoryError::NotFound)?;

        model_to_item(model)
    }

    async fn create(
        &self,
        data: NewPortfolioItemData,
    ) -> Result<PortfolioItem, PortfolioRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            subtitle: Set(data.subtitle),
            description: Set(data.description),
            category: Set(data.category),
            images: Set(images_to_json(data.images)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_item(result)
    }

    async fn update(&self, item: PortfolioItem) -> Result<PortfolioItem, PortfolioRepositoryError> {
        let model = ActiveModel {
            id: Unchanged(item.id),
            title: Set(item.title),
            subtitle: Set(item.subtitle),
            description: Set(item.description),
            category: Set(item.category),
            images: Set(images_to_json(item.images)?),
            created_at: NotSet,
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => PortfolioRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        model_to_item(result)
    }

    async fn delete(&self, id: Uuid) -> Result<PortfolioItem, PortfolioRepositoryError> {
        let snapshot = self.find_by_id(id).await?;

        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            debug!(item_id = %id, "Row vanished between read and delete");
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(snapshot)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_item(model: portfolio_items::Model) -> Result<PortfolioItem, PortfolioRepositoryError> {
    let images: Vec<StoredImage> = serde_json::from_value(model.images)
        .map_err(|e| PortfolioRepositoryError::SerializationError(e.to_string()))?;

    Ok(PortfolioItem {
        id: model.id,
        title: model.title,
        subtitle: model.subtitle,
        description: model.description,
        category: model.category,
        images: images.into_iter().map(PortfolioImage::from).collect(),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn images_to_json(images: Vec<PortfolioImage>) -> Result<serde_json::Value, PortfolioRepositoryError> {
    let stored: Vec<StoredImage> = images.into_iter().map(StoredImage::from).collect();
    serde_json::to_value(stored)
        .map_err(|e| PortfolioRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    PortfolioRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
