//! Transaction data aggregation for the dashboard cards and charts.
//!
//! Amounts are summed by their absolute value, the transaction type decides
//! whether an amount counts as income or expense.

use time::Month;

use crate::transaction::{Transaction, TransactionType};

/// The three-letter month names used as chart labels, January first.
pub(super) const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The total income and expenses of a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct IncomeExpenseTotals {
    pub income: f64,
    pub expense: f64,
}

impl IncomeExpenseTotals {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut totals, transaction| {
                match transaction.type_name {
                    TransactionType::Income => totals.income += transaction.amount.abs(),
                    TransactionType::Expense => totals.expense += transaction.amount.abs(),
                }

                totals
            })
    }

    /// Income minus expenses.
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

fn month_index(month: Month) -> usize {
    u8::from(month) as usize - 1
}

/// Sums the amounts of `transaction_type` into one bucket per calendar month.
///
/// Months without transactions are zero.
pub(super) fn monthly_totals(
    transactions: &[Transaction],
    transaction_type: TransactionType,
) -> [f64; 12] {
    let mut totals = [0.0; 12];

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.type_name == transaction_type)
    {
        totals[month_index(transaction.transaction_date.month())] += transaction.amount.abs();
    }

    totals
}

/// The years that have transactions, oldest first and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct YearList(Vec<i32>);

impl YearList {
    pub fn new(mut years: Vec<i32>) -> Self {
        years.sort_unstable();
        years.dedup();

        Self(years)
    }

    /// The newest year, if there is one.
    pub fn latest(&self) -> Option<i32> {
        self.0.last().copied()
    }

    pub fn years(&self) -> &[i32] {
        &self.0
    }

    /// The year to show when none was requested.
    pub fn default_year(&self, current_year: i32) -> i32 {
        self.latest().unwrap_or(current_year)
    }
}
