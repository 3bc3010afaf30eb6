//! Categories, payment methods and currencies: the dropdown sources of the
//! transaction form, and the modal for adding new ones.

mod core;
mod create_endpoint;
mod dropdown;
mod modal;

pub use core::{NewOption, OptionId, OptionKind, OptionName, SelectOption};
pub use create_endpoint::{create_category_endpoint, create_payment_method_endpoint};
pub use dropdown::{Dropdown, DropdownSources, option_select, radio_dropdown};
pub use modal::{AddOptionModal, CATEGORY_MODAL, PAYMENT_METHOD_MODAL};
