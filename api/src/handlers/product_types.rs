//! Product type handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::domain::entities::ProductType;
use crate::domain::pagination::Pagination;
use crate::domain::spec_params::ProductTypeSpecParams;
use crate::error::AppError;
use crate::handlers::{ensure_valid_id, ensure_valid_page};
use crate::AppState;

/// GET /api/product-types
pub async fn list_product_types(
    State(state): State<AppState>,
    Query(params): Query<ProductTypeSpecParams>,
) -> Result<Json<Pagination<ProductType>>, AppError> {
    ensure_valid_page(&params)?;

    let page = state
        .type_service
        .get_paginated(&params)
        .await
        .into_result()?;

    Ok(Json(page))
}

/// GET /api/product-types/:id
pub async fn get_product_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductType>, AppError> {
    ensure_valid_id(id)?;

    let product_type = state.type_service.get_by_id(id).await.into_result()?;

    Ok(Json(product_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use mockall::predicate::eq;

    use crate::domain::operation_result::OperationResult;
    use crate::domain::ports::{MockProductBrandService, MockProductTypeService};
    use crate::handlers::test_support::{into_response, json_body, state};

    fn types_page() -> Pagination<ProductType> {
        Pagination::new(
            1,
            10,
            2,
            vec![
                ProductType::new(1, "Type1", true),
                ProductType::new(2, "Type2", true),
            ],
        )
    }

    #[tokio::test]
    async fn list_returns_ok_with_count() {
        let mut types = MockProductTypeService::new();
        types
            .expect_get_paginated()
            .withf(|params| params.page_index == 1 && params.page_size == 10)
            .times(1)
            .returning(|_| OperationResult::success(types_page()));

        let response = into_response(
            list_product_types(
                State(state(MockProductBrandService::new(), types)),
                Query(ProductTypeSpecParams::new(1, 10)),
            )
            .await,
        );

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["pageIndex"], 1);
        assert_eq!(body["pageSize"], 10);
        assert_eq!(body["items"][1]["name"], "Type2");
    }

    #[tokio::test]
    async fn list_rejects_zero_page_index() {
        let mut types = MockProductTypeService::new();
        types.expect_get_paginated().never();

        let response = into_response(
            list_product_types(
                State(state(MockProductBrandService::new(), types)),
                Query(ProductTypeSpecParams::new(0, 10)),
            )
            .await,
        );

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Validation error");
    }

    #[tokio::test]
    async fn list_rejects_negative_page_size() {
        let mut types = MockProductTypeService::new();
        types.expect_get_paginated().never();

        let result = list_product_types(
            State(state(MockProductBrandService::new(), types)),
            Query(ProductTypeSpecParams::new(1, -10)),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn list_general_failure_is_server_error() {
        let mut types = MockProductTypeService::new();
        types
            .expect_get_paginated()
            .returning(|_| OperationResult::general("timeout"));

        let response = into_response(
            list_product_types(
                State(state(MockProductBrandService::new(), types)),
                Query(ProductTypeSpecParams::new(2, 5)),
            )
            .await,
        );

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn get_by_id_returns_ok() {
        let mut types = MockProductTypeService::new();
        types
            .expect_get_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| OperationResult::success(ProductType::new(id, "Type1", true)));

        let result = get_product_type(State(state(MockProductBrandService::new(), types)), Path(1))
            .await;

        let Json(product_type) = result.unwrap();
        assert_eq!(product_type, ProductType::new(1, "Type1", true));
    }

    #[tokio::test]
    async fn get_by_id_rejects_negative_id() {
        let mut types = MockProductTypeService::new();
        types.expect_get_by_id().never();

        let response = into_response(
            get_product_type(State(state(MockProductBrandService::new(), types)), Path(-5)).await,
        );

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_by_id_not_found() {
        let mut types = MockProductTypeService::new();
        types
            .expect_get_by_id()
            .with(eq(1000))
            .returning(|_| OperationResult::not_found("Product type 1000 not found"));

        let response = into_response(
            get_product_type(State(state(MockProductBrandService::new(), types)), Path(1000))
                .await,
        );

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_by_id_general_failure() {
        let mut types = MockProductTypeService::new();
        types
            .expect_get_by_id()
            .with(eq(1))
            .returning(|_| OperationResult::general("unexpected"));

        let response = into_response(
            get_product_type(State(state(MockProductBrandService::new(), types)), Path(1)).await,
        );

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["code"], "generalException");
    }
}
