use crate::modules::portfolio::application::domain::entities::{
    ImageUpload, PortfolioValidationError,
};

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
    /// Folder (object prefix) new images are written under.
    pub folder: String,
}

impl UploadPolicy {
    pub const DEFAULT_FOLDER: &'static str = "portfolio";
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024; // 10MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "image/gif",
        "image/avif",
    ];

    /// Load policy from `MEDIA_FOLDER` and `MEDIA_MAX_UPLOAD_BYTES`, with defaults.
    pub fn from_env() -> Self {
        let folder = std::env::var("MEDIA_FOLDER")
            .ok()
            .map(|s| s.trim().trim_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_FOLDER.to_string());

        let max_file_size_bytes = std::env::var("MEDIA_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            max_file_size_bytes,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            folder,
        }
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            folder: folder.into(),
        }
    }

    #[cfg(test)]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = bytes;
        self
    }

    pub fn check(&self, upload: &ImageUpload) -> Result<(), PortfolioValidationError> {
        let name = upload.file_name.as_deref().unwrap_or("image");

        if upload.bytes.is_empty() {
            return Err(PortfolioValidationError::InvalidUpload(format!(
                "{} is empty",
                name
            )));
        }

        let mime = upload.content_type.trim().to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&mime.as_str()) {
            return Err(PortfolioValidationError::InvalidUpload(format!(
                "{} has unsupported content type '{}'",
                name, upload.content_type
            )));
        }

        if upload.bytes.len() as u64 > self.max_file_size_bytes {
            return Err(PortfolioValidationError::InvalidUpload(format!(
                "{} exceeds the maximum size of {} bytes",
                name, self.max_file_size_bytes
            )));
        }

        Ok(())
    }

    pub fn check_all(&self, uploads: &[ImageUpload]) -> Result<(), PortfolioValidationError> {
        uploads.iter().try_for_each(|upload| self.check(upload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str, size: usize) -> ImageUpload {
        ImageUpload {
            bytes: vec![7u8; size],
            content_type: content_type.to_string(),
            file_name: Some("look.jpg".to_string()),
        }
    }

    #[test]
    fn test_accepts_allowed_image() {
        let policy = UploadPolicy::new("portfolio");
        assert!(policy.check(&upload("image/jpeg", 128)).is_ok());
        assert!(policy.check(&upload("IMAGE/PNG", 128)).is_ok());
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let policy = UploadPolicy::new("portfolio");
        let err = policy.check(&upload("application/pdf", 128)).unwrap_err();
        assert!(matches!(err, PortfolioValidationError::InvalidUpload(msg) if msg.contains("application/pdf")));
    }

    #[test]
    fn test_rejects_empty_file() {
        let policy = UploadPolicy::new("portfolio");
        let err = policy.check(&upload("image/png", 0)).unwrap_err();
        assert!(matches!(err, PortfolioValidationError::InvalidUpload(msg) if msg.contains("empty")));
    }

    #[test]
    fn test_rejects_oversize_file() {
        let policy = UploadPolicy::new("portfolio").with_max_file_size(10);
        let err = policy.check(&upload("image/webp", 11)).unwrap_err();
        assert!(matches!(err, PortfolioValidationError::InvalidUpload(msg) if msg.contains("maximum size")));
    }

    #[test]
    fn test_check_all_stops_at_first_violation() {
        let policy = UploadPolicy::new("portfolio");
        let uploads = vec![upload("image/png", 4), upload("text/plain", 4)];
        assert!(policy.check_all(&uploads).is_err());
        assert!(policy.check_all(&uploads[..1]).is_ok());
    }
}
