// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// `multipart/form-data` body shared by create and update.
///
/// Documentation only. Handlers read the body through `PortfolioForm`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct PortfolioMultipartRequest {
    /// Required on create, optional on update
    #[schema(example = "Bridal")]
    pub title: Option<String>,

    #[schema(example = "Ubud, Bali")]
    pub subtitle: Option<String>,

    pub description: Option<String>,

    /// Required on create, optional on update
    #[schema(example = "Wedding")]
    pub category: Option<String>,

    /// JSON array of `ImageMetadataDto`, in final display order
    #[schema(
        example = r#"[{"source":"https://storage.googleapis.com/bucket/portfolio/3f1c.jpg","altText":"Bride"},{"isNewUpload":true}]"#
    )]
    pub images_metadata: Option<String>,

    /// Image binaries, consumed in order by the `isNewUpload` entries
    #[schema(value_type = Vec<String>, format = Binary)]
    pub images: Vec<Vec<u8>>,

    /// Same as `images`, read after it
    #[schema(value_type = Vec<String>, format = Binary)]
    pub new_images: Vec<Vec<u8>>,
}
