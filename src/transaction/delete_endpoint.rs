//! Defines the endpoint for deleting a transaction from the overview table.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use axum_htmx::HX_TRIGGER;

use crate::{
    alert::Alert,
    backend::BackendClient,
    transaction::{TransactionId, overview_page::TRANSACTIONS_CHANGED_EVENT},
};

/// A route handler for deleting a transaction.
///
/// On success the response only holds an out-of-band alert, so the targeted
/// table row is replaced with nothing. The status code has to be 200 OK or
/// htmx will not remove the row.
pub async fn delete_transaction_endpoint(
    State(backend): State<BackendClient>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match backend.delete_transaction(transaction_id).await {
        Ok(()) => {
            tracing::info!("deleted transaction {transaction_id}");
            (
                [(HX_TRIGGER, TRANSACTIONS_CHANGED_EVENT)],
                Alert::success("Transaction deleted", "").into_oob_html(),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
