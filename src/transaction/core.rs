//! The transaction types exchanged with the finance API.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::select_option::OptionId;

time::serde::format_description!(pub(crate) iso_date, Date, "[year]-[month]-[day]");

/// The ID the finance API assigns to a transaction.
pub type TransactionId = i64;

/// Whether a transaction earned or spent money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    Expense,
}

impl TransactionType {
    /// Both transaction types in the order they are shown in forms.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The name used on the wire and in forms.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

/// An income or expense recorded by the finance API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID assigned by the finance API.
    pub id: TransactionId,
    /// A short label for the transaction.
    #[serde(default)]
    pub name: String,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub transaction_date: Date,
    /// Whether the transaction is an income or an expense.
    pub type_name: TransactionType,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// The category the transaction belongs to, if any.
    #[serde(default)]
    pub category_id: Option<OptionId>,
    /// How the transaction was paid, if known.
    #[serde(default)]
    pub payment_method_id: Option<OptionId>,
    /// The currency of `amount`, if known.
    #[serde(default)]
    pub currency_id: Option<OptionId>,
}

impl Transaction {
    /// Combine an ID assigned by the finance API with the fields of a
    /// transaction.
    pub fn from_new(id: TransactionId, transaction: NewTransaction) -> Self {
        Self {
            id,
            name: transaction.name,
            transaction_date: transaction.transaction_date,
            type_name: transaction.type_name,
            amount: transaction.amount,
            category_id: transaction.category_id,
            payment_method_id: transaction.payment_method_id,
            currency_id: transaction.currency_id,
        }
    }

    #[cfg(test)]
    pub fn build(
        id: TransactionId,
        transaction_date: Date,
        type_name: TransactionType,
        amount: f64,
    ) -> Self {
        Self {
            id,
            name: format!("Transaction {id}"),
            transaction_date,
            type_name,
            amount,
            category_id: None,
            payment_method_id: None,
            currency_id: None,
        }
    }
}

/// The payload for creating or updating a transaction.
///
/// Construct it from validated form input with
/// [TransactionFormData::into_new_transaction](crate::transaction::TransactionFormData::into_new_transaction).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub name: String,
    #[serde(with = "iso_date")]
    pub transaction_date: Date,
    pub type_name: TransactionType,
    pub amount: f64,
    pub category_id: Option<OptionId>,
    pub payment_method_id: Option<OptionId>,
    pub currency_id: Option<OptionId>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionType};

    #[test]
    fn deserializes_backend_transaction() {
        let body = json!({
            "id": 3,
            "name": "Rent",
            "transactionDate": "2024-02-29",
            "typeName": "Expense",
            "amount": 1200.5,
            "categoryId": 4,
            "paymentMethodId": null,
        });

        let transaction: Transaction = serde_json::from_value(body).unwrap();

        assert_eq!(
            transaction,
            Transaction {
                id: 3,
                name: "Rent".to_owned(),
                transaction_date: date!(2024 - 02 - 29),
                type_name: TransactionType::Expense,
                amount: 1200.5,
                category_id: Some(4),
                payment_method_id: None,
                currency_id: None,
            }
        );
    }

    #[test]
    fn missing_name_defaults_to_empty() {
        let body = json!({
            "id": 1,
            "transactionDate": "2024-01-01",
            "typeName": "Income",
            "amount": 10.0,
        });

        let transaction: Transaction = serde_json::from_value(body).unwrap();

        assert_eq!(transaction.name, "");
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let body = json!({
            "id": 1,
            "transactionDate": "2024-01-01",
            "typeName": "Transfer",
            "amount": 10.0,
        });

        let result = serde_json::from_value::<Transaction>(body);

        assert!(result.is_err());
    }
}
