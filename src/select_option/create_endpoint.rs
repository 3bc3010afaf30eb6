//! The endpoints behind the add-option modals.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HX_TRIGGER;
use maud::html;
use serde::Deserialize;

use crate::{
    backend::BackendClient,
    select_option::{
        Dropdown, NewOption, OptionName,
        modal::{AddOptionModal, CATEGORY_MODAL, PAYMENT_METHOD_MODAL},
        option_select,
    },
};

/// The event sent to the browser after an option was added, closes the modal.
pub const OPTION_ADDED_EVENT: &str = "option-added";

/// The form data of an add-option modal.
#[derive(Debug, Deserialize)]
pub struct OptionForm {
    /// The name typed into the modal.
    pub name: String,
}

/// Create a category and update the category dropdown.
pub async fn create_category_endpoint(
    State(backend): State<BackendClient>,
    Form(form): Form<OptionForm>,
) -> Response {
    create_option(CATEGORY_MODAL, &backend, &form.name).await
}

/// Create a payment method and update the payment method dropdown.
pub async fn create_payment_method_endpoint(
    State(backend): State<BackendClient>,
    Form(form): Form<OptionForm>,
) -> Response {
    create_option(PAYMENT_METHOD_MODAL, &backend, &form.name).await
}

/// Persist the option, then re-fetch its list and select the new entry.
///
/// Responds with an empty modal form and the refreshed `<select>` as an
/// out-of-band swap. A blank name re-renders the form with an error instead
/// and nothing is sent to the finance API.
async fn create_option(modal: AddOptionModal<'_>, backend: &BackendClient, name: &str) -> Response {
    let name = match OptionName::new(name) {
        Ok(name) => name,
        Err(error) => {
            return modal.form(Some(&format!("Error: {error}"))).into_response();
        }
    };

    let new_option = NewOption::new(name);

    if let Err(error) = backend.create_option(modal.kind, &new_option).await {
        tracing::error!(
            "could not create {} \"{}\": {error}",
            modal.kind.label(),
            new_option.name
        );
        return error.into_alert_response();
    }

    tracing::info!("created {} \"{}\"", modal.kind.label(), new_option.name);

    let dropdown = Dropdown::fetch(modal.kind, backend).await;
    let selected = dropdown.find_newest_by_name(&new_option.name);

    (
        [(HX_TRIGGER, OPTION_ADDED_EVENT)],
        html! {
            (modal.form(None))
            (option_select(&dropdown, selected, true))
        },
    )
        .into_response()
}
