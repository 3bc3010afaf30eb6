//! Defines the endpoint for saving a row of the overview table.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HX_TRIGGER;

use crate::{
    backend::BackendClient,
    select_option::DropdownSources,
    transaction::{
        Transaction, TransactionFormData, TransactionId,
        overview_page::{TRANSACTIONS_CHANGED_EVENT, transaction_row},
    },
};

/// A route handler for updating a transaction, responds with the re-rendered
/// table row and triggers a reload of the totals.
pub async fn edit_transaction_endpoint(
    State(backend): State<BackendClient>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionFormData>,
) -> Response {
    let transaction = match form.into_new_transaction() {
        Ok(transaction) => transaction,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = backend
        .update_transaction(transaction_id, &transaction)
        .await
    {
        tracing::error!("could not update transaction {transaction_id}: {error}");
        return error.into_alert_response();
    }

    tracing::info!("updated transaction {transaction_id}");

    let sources = DropdownSources::fetch(&backend).await;
    let transaction = Transaction::from_new(transaction_id, transaction);

    (
        [(HX_TRIGGER, TRANSACTIONS_CHANGED_EVENT)],
        transaction_row(&transaction, &sources),
    )
        .into_response()
}
