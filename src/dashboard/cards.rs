//! Summary cards with the yearly income, expense and net totals.

use maud::{Markup, html};

use crate::{dashboard::aggregation::IncomeExpenseTotals, html::format_amount};

fn card(id: &str, label: &str, amount: f64, amount_style: &str) -> Markup {
    html! {
        div
            id=(id)
            class="p-4 rounded-lg border border-gray-200 bg-white shadow-sm
                dark:bg-gray-800 dark:border-gray-700"
        {
            p class="text-sm font-medium text-gray-500 dark:text-gray-400" { (label) }
            p class={ "mt-1 text-2xl font-semibold tabular-nums " (amount_style) }
            {
                (format_amount(amount))
            }
        }
    }
}

/// Renders the income, expense and net cards for the selected year.
pub(super) fn summary_cards_view(totals: IncomeExpenseTotals) -> Markup {
    let net = totals.net();
    let net_style = if net < 0.0 {
        "text-red-600 dark:text-red-400"
    } else {
        "text-green-600 dark:text-green-400"
    };

    html! {
        section class="w-full grid grid-cols-1 sm:grid-cols-3 gap-4 mb-6"
        {
            (card("income-total", "Income", totals.income, "text-green-600 dark:text-green-400"))
            (card("expense-total", "Expenses", totals.expense, "text-red-600 dark:text-red-400"))
            (card("net-total", "Net", net, net_style))
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use crate::{
        dashboard::aggregation::IncomeExpenseTotals,
        test_utils::{must_select, text_of},
    };

    use super::summary_cards_view;

    #[test]
    fn shows_formatted_totals_and_negative_net_in_red() {
        let html = Html::parse_fragment(
            &summary_cards_view(IncomeExpenseTotals {
                income: 1000.0,
                expense: 1234.5,
            })
            .into_string(),
        );

        assert!(text_of(&must_select(&html, "#income-total")).contains("1,000.00"));
        assert!(text_of(&must_select(&html, "#expense-total")).contains("1,234.50"));

        let net = must_select(&html, "#net-total p.tabular-nums");
        assert_eq!(text_of(&net), "-234.50");
        assert!(net.value().attr("class").unwrap_or_default().contains("text-red-600"));
    }
}
