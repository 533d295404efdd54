use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    modules::portfolio::adapter::incoming::web::portfolio_response::PortfolioItemResponse,
    modules::portfolio::application::ports::incoming::use_cases::GetPortfolioItemError,
    shared::api::{ApiError, ApiResponse},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/portfolio/{id}",
    tag = "portfolio",
    params(("id" = Uuid, Path, description = "Portfolio item id")),
    responses(
        (status = 200, description = "Portfolio item", body = PortfolioItemResponse),
        (status = 404, description = "Portfolio item not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
#[get("/api/portfolio/{id}")]
pub async fn get_portfolio_item_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let item_id = path.into_inner();

    match data.portfolio.get_single.execute(item_id).await {
        Ok(item) => ApiResponse::success(PortfolioItemResponse::from(item)),
        Err(GetPortfolioItemError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_ITEM_NOT_FOUND", "Portfolio item not found")
        }
        Err(GetPortfolioItemError::RepositoryError(msg)) => {
            tracing::error!(item_id = %item_id, error = %msg, "Failed to load portfolio item");
            ApiResponse::internal_error_with_detail(
                "INTERNAL_ERROR",
                "Failed to retrieve portfolio item",
                &msg,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::shared::api::request_config::custom_path_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_test_fixtures::sample_item;
    use crate::tests::support::stubs::StubGetPortfolioItemUseCase;

    #[actix_web::test]
    async fn get_portfolio_item_found() {
        let item = sample_item(&["https://media.test/portfolio/a"]);
        let state = TestAppStateBuilder::default()
            .with_get_single(StubGetPortfolioItemUseCase::success(item.clone()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_portfolio_item_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/portfolio/{}", item.id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["id"], item.id.to_string());
        assert_eq!(json["title"], "Bridal");
        assert_eq!(json["category"], "Wedding");
    }

    #[actix_web::test]
    async fn get_portfolio_item_unknown_returns_404_with_message() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_portfolio_item_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/portfolio/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["code"], "PORTFOLIO_ITEM_NOT_FOUND");
        assert_eq!(json["message"], "Portfolio item not found");
    }

    #[actix_web::test]
    async fn get_portfolio_item_malformed_id_returns_404() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_path_config(
                    "PORTFOLIO_ITEM_NOT_FOUND",
                    "Portfolio item not found",
                ))
                .service(get_portfolio_item_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolio/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["code"], "PORTFOLIO_ITEM_NOT_FOUND");
    }

    #[actix_web::test]
    async fn get_portfolio_item_repository_error_returns_500() {
        let state = TestAppStateBuilder::default()
            .with_get_single(StubGetPortfolioItemUseCase::error("db down"))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_portfolio_item_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/portfolio/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
