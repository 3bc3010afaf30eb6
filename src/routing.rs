//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    about::get_about_page,
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    select_option::{create_category_endpoint, create_payment_method_endpoint},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_home_page, get_overview_page, get_overview_totals,
    },
};

/// Return a router with all the app's routes.
///
/// The route table is built once at startup and does not change afterwards.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.static_dir);

    let view_routes = Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(endpoints::OVERVIEW_VIEW, get(get_overview_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::ABOUT_VIEW, get(get_about_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(endpoints::OVERVIEW_TOTALS_API, get(get_overview_totals))
        .route(endpoints::CATEGORIES_API, post(create_category_endpoint))
        .route(
            endpoints::PAYMENT_METHODS_API,
            post(create_payment_method_endpoint),
        );

    view_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, static_dir)
        .fallback(get_404_not_found)
        .with_state(state)
}
