//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of failing like axum::Form.
use axum_extra::extract::Form;
use maud::html;
use time::OffsetDateTime;

use crate::{
    alert::Alert, backend::BackendClient, select_option::DropdownSources,
    transaction::form::{TransactionFormData, transaction_form},
};

/// A route handler for creating a new transaction.
///
/// On success the form is replaced with a fresh, empty one and a success
/// alert is swapped in out-of-band. On failure an error alert is returned and
/// the submitted form stays on the page.
pub async fn create_transaction_endpoint(
    State(backend): State<BackendClient>,
    Form(form): Form<TransactionFormData>,
) -> Response {
    let transaction = match form.into_new_transaction() {
        Ok(transaction) => transaction,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = backend.create_transaction(&transaction).await {
        tracing::error!("could not create transaction: {error}");
        return error.into_alert_response();
    }

    tracing::info!("created transaction \"{}\"", transaction.name);

    let sources = DropdownSources::fetch(&backend).await;
    let today = OffsetDateTime::now_utc().date();
    let alert = Alert::success(
        "Transaction saved",
        &format!("\"{}\" was added.", transaction.name),
    );

    html! {
        (transaction_form(&sources, today))
        (alert.into_oob_html())
    }
    .into_response()
}
