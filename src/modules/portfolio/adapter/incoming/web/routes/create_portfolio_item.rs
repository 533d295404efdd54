use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    api::schemas::PortfolioMultipartRequest,
    modules::portfolio::adapter::incoming::web::portfolio_form::PortfolioForm,
    modules::portfolio::adapter::incoming::web::portfolio_response::PortfolioItemResponse,
    modules::portfolio::application::ports::incoming::use_cases::CreatePortfolioItemError,
    shared::api::request_config::multipart_rejection,
    shared::api::{ApiError, ApiResponse},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/portfolio",
    tag = "portfolio",
    request_body(content = PortfolioMultipartRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Portfolio item created", body = PortfolioItemResponse),
        (status = 400, description = "Missing field, malformed metadata or invalid image", body = ApiError),
        (status = 500, description = "Upload or persistence failure", body = ApiError)
    )
)]
#[post("/api/portfolio")]
pub async fn create_portfolio_item_handler(
    data: web::Data<AppState>,
    form: Result<MultipartForm<PortfolioForm>, actix_web::Error>,
) -> impl Responder {
    let form = match form {
        Ok(MultipartForm(form)) => form,
        Err(err) => return multipart_rejection(err),
    };

    let command = match form.into_create_command() {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.portfolio.create.execute(command).await {
        Ok(item) => ApiResponse::created(PortfolioItemResponse::from(item)),
        Err(err) => map_create_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_error(err: CreatePortfolioItemError) -> HttpResponse {
    match err {
        CreatePortfolioItemError::Validation(e) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        CreatePortfolioItemError::MediaUploadFailed(msg) => {
            tracing::error!(error = %msg, "Image upload failed while creating portfolio item");
            ApiResponse::internal_error_with_detail(
                "MEDIA_UPLOAD_FAILED",
                "Failed to upload images",
                &msg,
            )
        }
        CreatePortfolioItemError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Failed to create portfolio item");
            ApiResponse::internal_error_with_detail(
                "INTERNAL_ERROR",
                "Failed to create portfolio item",
                &msg,
            )
        }
    }
}
