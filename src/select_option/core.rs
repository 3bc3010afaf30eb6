//! The selectable entities (categories, payment methods and currencies) that
//! populate the dropdowns of the transaction form.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The ID the finance API assigns to a category, payment method or currency.
pub type OptionId = i64;

/// A named selectable entity with an ID assigned by the finance API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// The ID assigned by the finance API.
    pub id: OptionId,
    /// The name shown in the dropdown.
    pub name: String,
}

/// The payload for creating a new option.
///
/// The finance API assigns the real ID, so the payload always carries the
/// placeholder ID `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOption {
    /// Always [NewOption::PLACEHOLDER_ID].
    pub id: OptionId,
    /// The validated, trimmed name.
    pub name: String,
}

impl NewOption {
    /// The ID sent for options that have not been created yet.
    pub const PLACEHOLDER_ID: OptionId = 0;

    /// Create the payload for a new option called `name`.
    pub fn new(name: OptionName) -> Self {
        Self {
            id: Self::PLACEHOLDER_ID,
            name: name.0,
        }
    }
}

/// The name of a new option, trimmed and guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionName(String);

impl OptionName {
    /// Create an option name from user input.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    /// Returns [Error::EmptyOptionName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyOptionName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }
}

impl AsRef<str> for OptionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for OptionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three kinds of dropdown source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Categories, e.g. "Groceries".
    Category,
    /// Payment methods, e.g. "Credit card".
    PaymentMethod,
    /// Currencies, e.g. "EUR". Read-only in this client.
    Currency,
}

impl OptionKind {
    /// The collection path of this kind in the finance API.
    pub fn backend_path(self) -> &'static str {
        match self {
            OptionKind::Category => "/categories",
            OptionKind::PaymentMethod => "/paymentMethods",
            OptionKind::Currency => "/currencies",
        }
    }

    /// The HTML ID of the control that selects this kind.
    pub fn element_id(self) -> &'static str {
        match self {
            OptionKind::Category => "category",
            OptionKind::PaymentMethod => "payment",
            OptionKind::Currency => "currency",
        }
    }

    /// The name of the form field that carries the selected ID.
    pub fn field_name(self) -> &'static str {
        match self {
            OptionKind::Category => "category_id",
            OptionKind::PaymentMethod => "payment_method_id",
            OptionKind::Currency => "currency_id",
        }
    }

    /// The human readable name of this kind.
    pub fn label(self) -> &'static str {
        match self {
            OptionKind::Category => "Category",
            OptionKind::PaymentMethod => "Payment method",
            OptionKind::Currency => "Currency",
        }
    }
}
