use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    modules::portfolio::application::ports::incoming::use_cases::DeletePortfolioItemError,
    shared::api::{ApiError, ApiMessage, ApiResponse},
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/portfolio/{id}",
    tag = "portfolio",
    params(("id" = Uuid, Path, description = "Portfolio item id")),
    responses(
        (status = 200, description = "Portfolio item deleted", body = ApiMessage,
            example = json!({ "message": "Portfolio item deleted successfully" })),
        (status = 404, description = "Portfolio item not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
#[delete("/api/portfolio/{id}")]
pub async fn delete_portfolio_item_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let item_id = path.into_inner();

    match data.portfolio.delete.execute(item_id).await {
        Ok(_) => ApiResponse::message("Portfolio item deleted successfully"),
        Err(DeletePortfolioItemError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_ITEM_NOT_FOUND", "Portfolio item not found")
        }
        Err(DeletePortfolioItemError::RepositoryError(msg)) => {
            tracing::error!(item_id = %item_id, error = %msg, "Failed to delete portfolio item");
            ApiResponse::internal_error_with_detail(
                "INTERNAL_ERROR",
                "Failed to delete portfolio item",
                &msg,
            )
        }
    }
}
