//! Transactions: the form for recording them on the home page, the overview
//! table for editing and deleting them, and the endpoints behind both.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod home_page;
mod overview_page;

pub use core::{NewTransaction, Transaction, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::TransactionFormData;
pub use home_page::get_home_page;
pub use overview_page::{get_overview_page, get_overview_totals};
