use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use serde::Deserialize;
use std::fmt;
use utoipa::ToSchema;

use crate::modules::portfolio::application::domain::entities::{ImageDescriptor, ImageUpload};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioItemCommand, UpdatePortfolioItemCommand,
};

/// Upper bound on binaries per request, across both file fields.
pub const MAX_FILES_PER_REQUEST: usize = 10;

//
// ──────────────────────────────────────────────────────────
// Multipart form
// ──────────────────────────────────────────────────────────
//

/// Shared body of create and update requests.
///
/// Binaries are read from `images` first, then `newImages`, each in arrival order.
#[derive(Debug, MultipartForm)]
pub struct PortfolioForm {
    pub title: Option<Text<String>>,
    pub subtitle: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub category: Option<Text<String>>,
    #[multipart(rename = "imagesMetadata")]
    pub images_metadata: Option<Text<String>>,
    pub images: Vec<Bytes>,
    #[multipart(rename = "newImages")]
    pub new_images: Vec<Bytes>,
}

/// One element of the `imagesMetadata` JSON array.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadataDto {
    #[serde(default, alias = "src")]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "alt")]
    pub alt_text: Option<String>,
    /// `null` and a missing flag both mean "already stored".
    #[serde(default, alias = "isNew")]
    pub is_new_upload: Option<bool>,
}

impl From<ImageMetadataDto> for ImageDescriptor {
    fn from(dto: ImageMetadataDto) -> Self {
        if dto.is_new_upload.unwrap_or(false) {
            ImageDescriptor::New {
                description: dto.description,
                alt_text: dto.alt_text,
            }
        } else {
            ImageDescriptor::Kept {
                source: dto.source.unwrap_or_default(),
                description: dto.description,
                alt_text: dto.alt_text,
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioFormError {
    MalformedMetadata(String),
    TooManyFiles(usize),
}

impl fmt::Display for PortfolioFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioFormError::MalformedMetadata(msg) => {
                write!(f, "imagesMetadata is not a valid JSON array: {}", msg)
            }
            PortfolioFormError::TooManyFiles(count) => write!(
                f,
                "at most {} images can be uploaded at once, got {}",
                MAX_FILES_PER_REQUEST, count
            ),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Conversion
// ──────────────────────────────────────────────────────────
//

struct FormParts {
    title: Option<String>,
    subtitle: Option<String>,
    description: Option<String>,
    category: Option<String>,
    images: Option<Vec<ImageDescriptor>>,
    uploads: Vec<ImageUpload>,
}

/// Missing or blank metadata means "no target list supplied".
pub fn parse_images_metadata(
    raw: Option<&str>,
) -> Result<Option<Vec<ImageDescriptor>>, PortfolioFormError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let entries: Vec<ImageMetadataDto> = serde_json::from_str(raw)
        .map_err(|e| PortfolioFormError::MalformedMetadata(e.to_string()))?;

    Ok(Some(entries.into_iter().map(ImageDescriptor::from).collect()))
}

fn to_upload(file: Bytes) -> ImageUpload {
    ImageUpload {
        content_type: file
            .content_type
            .as_ref()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default(),
        file_name: file.file_name,
        bytes: file.data.to_vec(),
    }
}

impl PortfolioForm {
    fn into_parts(self) -> Result<FormParts, PortfolioFormError> {
        let file_count = self.images.len() + self.new_images.len();
        if file_count > MAX_FILES_PER_REQUEST {
            return Err(PortfolioFormError::TooManyFiles(file_count));
        }

        let images = parse_images_metadata(self.images_metadata.as_deref().map(String::as_str))?;

        let uploads = self
            .images
            .into_iter()
            .chain(self.new_images)
            .map(to_upload)
            .collect();

        Ok(FormParts {
            title: self.title.map(Text::into_inner),
            subtitle: self.subtitle.map(Text::into_inner),
            description: self.description.map(Text::into_inner),
            category: self.category.map(Text::into_inner),
            images,
            uploads,
        })
    }

    pub fn into_create_command(self) -> Result<CreatePortfolioItemCommand, PortfolioFormError> {
        let parts = self.into_parts()?;
        Ok(CreatePortfolioItemCommand {
            title: parts.title,
            subtitle: parts.subtitle,
            description: parts.description,
            category: parts.category,
            images: parts.images,
            uploads: parts.uploads,
        })
    }

    pub fn into_update_command(self) -> Result<UpdatePortfolioItemCommand, PortfolioFormError> {
        let parts = self.into_parts()?;
        Ok(UpdatePortfolioItemCommand {
            title: parts.title,
            subtitle: parts.subtitle,
            description: parts.description,
            category: parts.category,
            images: parts.images,
            uploads: parts.uploads,
        })
    }
}
