//! The form for recording a new transaction.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    Error, endpoints,
    html::{
        BUTTON_ADD_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
    select_option::{
        AddOptionModal, CATEGORY_MODAL, DropdownSources, OptionId, PAYMENT_METHOD_MODAL,
        option_select, radio_dropdown,
    },
    transaction::{NewTransaction, TransactionType, core::iso_date},
};

/// The HTML ID of the transaction form.
pub const TRANSACTION_FORM_ID: &str = "transaction-form";

/// The fields submitted by the transaction form and the rows of the overview
/// table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionFormData {
    /// A short label for the transaction.
    pub name: String,
    /// The amount of money, always positive.
    pub amount: f64,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Income or expense.
    pub type_name: TransactionType,
    /// The selected category, if any.
    #[serde(default)]
    pub category_id: Option<OptionId>,
    /// The selected payment method, if any.
    #[serde(default)]
    pub payment_method_id: Option<OptionId>,
    /// The selected currency, if any.
    #[serde(default)]
    pub currency_id: Option<OptionId>,
}

impl TransactionFormData {
    /// Validate the form input and convert it into the payload for the
    /// finance API.
    ///
    /// # Errors
    /// - [Error::EmptyTransactionName] if the name is empty or only whitespace.
    /// - [Error::InvalidAmount] if the amount is not a finite number greater than zero.
    pub fn into_new_transaction(self) -> Result<NewTransaction, Error> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(Error::EmptyTransactionName);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        Ok(NewTransaction {
            name: name.to_owned(),
            transaction_date: self.date,
            type_name: self.type_name,
            amount: self.amount,
            category_id: self.category_id,
            payment_method_id: self.payment_method_id,
            currency_id: self.currency_id,
        })
    }
}

fn add_option_button(modal: &AddOptionModal<'_>) -> Markup {
    html! {
        button
            type="button"
            data-bs-toggle="modal"
            data-bs-target=(modal.target())
            title=(modal.title)
            class=(BUTTON_ADD_STYLE)
        {
            "+"
        }
    }
}

fn type_radio_group(checked: TransactionType) -> Markup {
    html! {
        fieldset
        {
            legend class=(FORM_LABEL_STYLE) { "Type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for transaction_type in TransactionType::ALL {
                    @let id = format!("type-{}", transaction_type.as_str().to_lowercase());

                    label for=(id) class="flex flex-1 items-center gap-2"
                    {
                        input
                            type="radio"
                            id=(id)
                            name="type_name"
                            value=(transaction_type.as_str())
                            checked[transaction_type == checked]
                            class=(FORM_RADIO_INPUT_STYLE);

                        span class=(FORM_RADIO_LABEL_STYLE) { (transaction_type.as_str()) }
                    }
                }
            }
        }
    }
}

/// The empty transaction form with the three dropdowns filled from `sources`.
///
/// A successful submit replaces the whole form with a fresh one, so the form
/// targets itself. Errors go to the alert container and leave the input as is.
pub fn transaction_form(sources: &DropdownSources, today: Date) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            id=(TRANSACTION_FORM_ID)
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "New Transaction" }

            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id="name"
                    name="name"
                    type="text"
                    placeholder="e.g. Groceries at the market"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex gap-2"
            {
                div class="grow"
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    input
                        id="amount"
                        name="amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="w-32"
                {
                    span class=(FORM_LABEL_STYLE) { "Currency" }

                    (radio_dropdown(&sources.currencies, None))
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    id="date"
                    name="date"
                    type="date"
                    value=(today)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                div class="flex gap-2"
                {
                    (option_select(&sources.categories, None, false))
                    (add_option_button(&CATEGORY_MODAL))
                }
            }

            div
            {
                label for="payment" class=(FORM_LABEL_STYLE) { "Payment method" }

                div class="flex gap-2"
                {
                    (option_select(&sources.payment_methods, None, false))
                    (add_option_button(&PAYMENT_METHOD_MODAL))
                }
            }

            (type_radio_group(TransactionType::Expense))

            button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (spinner) }
                " Save Transaction"
            }
        }
    }
}
