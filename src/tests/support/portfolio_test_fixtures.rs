use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::{
    ImageUpload, PortfolioImage, PortfolioItem,
};

pub fn jpeg_upload() -> ImageUpload {
    ImageUpload {
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10],
        content_type: "image/jpeg".to_string(),
        file_name: Some("look.jpg".to_string()),
    }
}

pub fn sample_item(sources: &[&str]) -> PortfolioItem {
    let created_at = Utc::now() - Duration::days(1);
    PortfolioItem {
        id: Uuid::new_v4(),
        title: "Bridal".to_string(),
        subtitle: Some("Spring collection".to_string()),
        description: Some("Soft glam look".to_string()),
        category: "Wedding".to_string(),
        images: sources.iter().map(|s| PortfolioImage::new(*s)).collect(),
        created_at,
        updated_at: created_at,
    }
}
