use actix_web::{get, web, Responder};

use crate::{
    modules::portfolio::adapter::incoming::web::portfolio_response::PortfolioItemResponse,
    modules::portfolio::application::ports::incoming::use_cases::GetPortfolioItemsError,
    shared::api::{ApiError, ApiResponse},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Portfolio items, newest first", body = Vec<PortfolioItemResponse>),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_items_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_list.execute().await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(PortfolioItemResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetPortfolioItemsError::RepositoryError(msg)) => {
            tracing::error!(error = %msg, "Failed to list portfolio items");
            ApiResponse::internal_error_with_detail(
                "INTERNAL_ERROR",
                "Failed to retrieve portfolio items",
                &msg,
            )
        }
    }
}
