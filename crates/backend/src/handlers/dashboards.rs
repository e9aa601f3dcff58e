use axum::extract::Query;
use axum::Json;
use contracts::dashboards::d400_sales_by_date::{SalesByDateRequest, SalesByDateResponse};
use contracts::dashboards::d401_product_sales::ProductSalesResponse;
use contracts::dashboards::d402_ingredient_usage::{
    IngredientUsageRequest, IngredientUsageResponse,
};
use contracts::dashboards::d403_finance::{FinanceRequest, FinanceSummary};

use crate::dashboards::{
    d400_sales_by_date, d401_product_sales, d402_ingredient_usage, d403_finance,
};
use crate::domain::a005_order::repository::JsonlOrderRepository;
use crate::shared::error::PosError;

/// GET /api/dashboards/sales-by-date?granularity=daily|weekly|monthly
pub async fn sales_by_date(
    Query(request): Query<SalesByDateRequest>,
) -> Result<Json<SalesByDateResponse>, PosError> {
    let log = JsonlOrderRepository::from_storage()?;
    Ok(Json(
        d400_sales_by_date::service::get_sales_by_date(&log, request).await?,
    ))
}

/// GET /api/dashboards/product-sales
pub async fn product_sales() -> Result<Json<ProductSalesResponse>, PosError> {
    let log = JsonlOrderRepository::from_storage()?;
    Ok(Json(d401_product_sales::service::get_product_sales(&log).await?))
}

/// GET /api/dashboards/ingredient-usage?year=&month=
pub async fn ingredient_usage(
    Query(request): Query<IngredientUsageRequest>,
) -> Result<Json<IngredientUsageResponse>, PosError> {
    let log = JsonlOrderRepository::from_storage()?;
    Ok(Json(
        d402_ingredient_usage::service::get_ingredient_usage(&log, request).await?,
    ))
}

/// GET /api/dashboards/finance?expenses=
pub async fn finance(
    Query(request): Query<FinanceRequest>,
) -> Result<Json<FinanceSummary>, PosError> {
    let log = JsonlOrderRepository::from_storage()?;
    Ok(Json(d403_finance::service::get_finance_summary(&log, request).await?))
}
