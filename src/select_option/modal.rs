//! A reusable modal that asks for the name of a new dropdown option.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_TEXT_INPUT_STYLE, MODAL_STYLE},
    select_option::OptionKind,
};

/// The inputs of an add-option modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOptionModal<'a> {
    /// The HTML ID of the `<dialog>`, referenced by the buttons that open it.
    pub modal_id: &'a str,
    /// The heading of the modal.
    pub title: &'a str,
    /// The placeholder of the name input.
    pub placeholder: &'a str,
    /// The kind of option the modal creates.
    pub kind: OptionKind,
    /// The route the name is posted to.
    pub endpoint: &'a str,
}

/// The modal for adding a category.
pub const CATEGORY_MODAL: AddOptionModal<'static> = AddOptionModal {
    modal_id: "addCategoryModal",
    title: "Add Category",
    placeholder: "New category name",
    kind: OptionKind::Category,
    endpoint: endpoints::CATEGORIES_API,
};

/// The modal for adding a payment method.
pub const PAYMENT_METHOD_MODAL: AddOptionModal<'static> = AddOptionModal {
    modal_id: "addPaymentMethodModal",
    title: "Add Payment Method",
    placeholder: "New payment method name",
    kind: OptionKind::PaymentMethod,
    endpoint: endpoints::PAYMENT_METHODS_API,
};

impl AddOptionModal<'_> {
    /// The CSS selector of the modal, for `data-bs-target` attributes.
    pub fn target(&self) -> String {
        format!("#{}", self.modal_id)
    }

    /// The whole modal, closed until a button with `data-bs-target` opens it.
    pub fn into_html(self) -> Markup {
        html! {
            dialog
                id=(self.modal_id)
                class={ "modal " (MODAL_STYLE) }
                aria-labelledby=(self.title_id())
            {
                (self.form(None))
            }
        }
    }

    /// The form inside the modal, with an empty name input.
    ///
    /// Submitting replaces the form with the response, so a fresh form clears
    /// the input after a successful submit. `error_message` is shown below the
    /// input when the previous submission was rejected.
    pub fn form(&self, error_message: Option<&str>) -> Markup {
        html! {
            form
                hx-post=(self.endpoint)
                hx-target="this"
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="space-y-4"
            {
                div class="modal-header"
                {
                    h5 id=(self.title_id()) class="modal-title text-xl font-bold" { (self.title) }
                }

                div class="modal-body"
                {
                    input
                        type="text"
                        name="name"
                        placeholder=(self.placeholder)
                        required
                        autocomplete="off"
                        class=(FORM_TEXT_INPUT_STYLE);

                    @if let Some(error_message) = error_message {
                        p class="mt-2 text-red-600 dark:text-red-400" { (error_message) }
                    }
                }

                div class="modal-footer flex gap-2"
                {
                    button
                        type="button"
                        data-bs-dismiss="modal"
                        class={ "btn-secondary " (BUTTON_SECONDARY_STYLE) }
                    {
                        "Close"
                    }

                    button type="submit" class={ "btn-primary " (BUTTON_PRIMARY_STYLE) }
                    {
                        "Add"
                    }
                }
            }
        }
    }

    fn title_id(&self) -> String {
        format!("{}-title", self.modal_id)
    }
}
