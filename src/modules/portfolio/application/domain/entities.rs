use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Portfolio image
// ──────────────────────────────────────────────────────────
//

/// An image reference as it is persisted on a portfolio item.
///
/// The bytes live in the media store; `source` is the public URL handed back by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioImage {
    pub source: String,
    pub description: Option<String>,
    pub alt_text: Option<String>,
}

impl PortfolioImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            description: None,
            alt_text: None,
        }
    }
}

/// Client-supplied description of one slot in the target image list.
///
/// `New` slots carry no source yet: the next unconsumed binary of the request fills them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDescriptor {
    Kept {
        source: String,
        description: Option<String>,
        alt_text: Option<String>,
    },
    New {
        description: Option<String>,
        alt_text: Option<String>,
    },
}

impl ImageDescriptor {
    pub fn kept(image: PortfolioImage) -> Self {
        ImageDescriptor::Kept {
            source: image.source,
            description: image.description,
            alt_text: image.alt_text,
        }
    }

    pub fn new_upload() -> Self {
        ImageDescriptor::New {
            description: None,
            alt_text: None,
        }
    }

    #[cfg(test)]
    pub fn is_new_upload(&self) -> bool {
        matches!(self, ImageDescriptor::New { .. })
    }
}

/// Raw binary received with a create/update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Portfolio item
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub category: String,
    pub images: Vec<PortfolioImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioItem {
    #[cfg(test)]
    pub fn image_sources(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(|img| img.source.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioValidationError {
    MissingField(&'static str),
    EmptyField(&'static str),
    NoImages,
    InvalidUpload(String),
}

impl fmt::Display for PortfolioValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioValidationError::MissingField(field) => write!(f, "{} is required", field),
            PortfolioValidationError::EmptyField(field) => {
                write!(f, "{} must not be empty", field)
            }
            PortfolioValidationError::NoImages => {
                write!(f, "at least one image is required for a new portfolio item")
            }
            PortfolioValidationError::InvalidUpload(msg) => write!(f, "{}", msg),
        }
    }
}

/// Trimmed, non-empty value of a required text field.
pub fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, PortfolioValidationError> {
    let value = value.ok_or(PortfolioValidationError::MissingField(field))?;
    non_empty_text(field, value)
}

pub fn non_empty_text(
    field: &'static str,
    value: String,
) -> Result<String, PortfolioValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PortfolioValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Blank optional text collapses to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
