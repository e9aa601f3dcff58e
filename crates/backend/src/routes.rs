use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CATALOG
        // ========================================
        .route(
            "/api/pizzas",
            get(handlers::a001_pizza::list_all).post(handlers::a001_pizza::create),
        )
        .route(
            "/api/accompaniments",
            get(handlers::a002_accompaniment::list_all)
                .post(handlers::a002_accompaniment::create),
        )
        .route("/api/promotions", get(handlers::a003_promotion::list_all))
        .route("/api/ingredients", get(handlers::a006_ingredient::list_all))
        .route("/api/menu", get(handlers::a005_order::get_menu))
        .route(
            "/api/clients",
            get(handlers::a004_client::list_all).post(handlers::a004_client::create),
        )
        // ========================================
        // ORDER DRAFTS
        // ========================================
        .route("/api/orders/drafts", post(handlers::a005_order::create_draft))
        .route(
            "/api/orders/drafts/:id",
            get(handlers::a005_order::get_draft).delete(handlers::a005_order::discard_draft),
        )
        .route(
            "/api/orders/drafts/:id/pizza",
            post(handlers::a005_order::add_pizza),
        )
        .route(
            "/api/orders/drafts/:id/accompaniment",
            post(handlers::a005_order::add_accompaniment),
        )
        .route(
            "/api/orders/drafts/:id/custom-pizza",
            post(handlers::a005_order::add_custom_pizza),
        )
        .route(
            "/api/orders/drafts/:id/items/:index",
            delete(handlers::a005_order::remove_item),
        )
        .route(
            "/api/orders/drafts/:id/submit",
            post(handlers::a005_order::submit),
        )
        // ========================================
        // ORDERS & RECEIPTS
        // ========================================
        .route("/api/orders", get(handlers::a005_order::list_orders))
        .route("/api/orders/:number", get(handlers::a005_order::get_order))
        .route(
            "/api/orders/:number/receipt",
            get(handlers::a005_order::get_receipt),
        )
        .route(
            "/api/orders/:number/kitchen-ticket",
            get(handlers::a005_order::get_kitchen_ticket),
        )
        // ========================================
        // DASHBOARDS & REPORTS
        // ========================================
        .route(
            "/api/dashboards/sales-by-date",
            get(handlers::dashboards::sales_by_date),
        )
        .route(
            "/api/dashboards/product-sales",
            get(handlers::dashboards::product_sales),
        )
        .route(
            "/api/dashboards/ingredient-usage",
            get(handlers::dashboards::ingredient_usage),
        )
        .route("/api/dashboards/finance", get(handlers::dashboards::finance))
        .route(
            "/api/reports/period-summary",
            get(handlers::reports::period_summary),
        )
}
