use actix_multipart::form::MultipartForm;
use actix_web::{put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::PortfolioMultipartRequest,
    modules::portfolio::adapter::incoming::web::portfolio_form::PortfolioForm,
    modules::portfolio::adapter::incoming::web::portfolio_response::PortfolioItemResponse,
    modules::portfolio::application::ports::incoming::use_cases::UpdatePortfolioItemError,
    shared::api::request_config::multipart_rejection,
    shared::api::{ApiError, ApiResponse},
    AppState,
};

#[utoipa::path(
    put,
    path = "/api/portfolio/{id}",
    tag = "portfolio",
    params(("id" = Uuid, Path, description = "Portfolio item id")),
    request_body(content = PortfolioMultipartRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Portfolio item updated", body = PortfolioItemResponse),
        (status = 400, description = "Invalid field, malformed metadata or invalid image", body = ApiError),
        (status = 404, description = "Portfolio item not found", body = ApiError),
        (status = 500, description = "Upload or persistence failure", body = ApiError)
    )
)]
#[put("/api/portfolio/{id}")]
pub async fn update_portfolio_item_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    form: Result<MultipartForm<PortfolioForm>, actix_web::Error>,
) -> impl Responder {
    let form = match form {
        Ok(MultipartForm(form)) => form,
        Err(err) => return multipart_rejection(err),
    };

    let item_id = path.into_inner();

    let command = match form.into_update_command() {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.portfolio.update.execute(item_id, command).await {
        Ok(item) => ApiResponse::success(PortfolioItemResponse::from(item)),
        Err(err) => map_update_error(item_id, err),
    }
}

fn map_update_error(item_id: Uuid, err: UpdatePortfolioItemError) -> HttpResponse {
    match err {
        UpdatePortfolioItemError::NotFound => {
            ApiResponse::not_found("PORTFOLIO_ITEM_NOT_FOUND", "Portfolio item not found")
        }
        UpdatePortfolioItemError::Validation(e) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        UpdatePortfolioItemError::MediaUploadFailed(msg) => {
            tracing::error!(item_id = %item_id, error = %msg, "Image upload failed while updating portfolio item");
            ApiResponse::internal_error_with_detail(
                "MEDIA_UPLOAD_FAILED",
                "Failed to upload images",
                &msg,
            )
        }
        UpdatePortfolioItemError::RepositoryError(msg) => {
            tracing::error!(item_id = %item_id, error = %msg, "Failed to update portfolio item");
            ApiResponse::internal_error_with_detail(
                "INTERNAL_ERROR",
                "Failed to update portfolio item",
                &msg,
            )
        }
    }
}
