//! The URIs served by this application.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}',
//! use [format_endpoint].

/// The home page with the form for recording a new transaction.
pub const ROOT: &str = "/";
/// The page listing all transactions in a table.
pub const OVERVIEW_VIEW: &str = "/overview";
/// The page with the yearly income and expense charts.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page describing the application.
pub const ABOUT_VIEW: &str = "/about";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to update or delete a single transaction.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";
/// The route for the income and expense totals of the overview table.
pub const OVERVIEW_TOTALS_API: &str = "/api/overview/totals";
/// The route to create a category.
pub const CATEGORIES_API: &str = "/api/categories";
/// The route to create a payment method.
pub const PAYMENT_METHODS_API: &str = "/api/payment_methods";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

/// The dashboard URL with the year filter applied.
pub fn dashboard_for_year(year: i32) -> String {
    format!("{DASHBOARD_VIEW}?year={year}")
}
