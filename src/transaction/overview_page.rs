//! Defines the route handler for the page that lists all transactions in an
//! editable table.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::PageState,
    backend::BackendClient,
    dashboard::aggregation::IncomeExpenseTotals,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_SECONDARY_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_INPUT_STYLE, TABLE_ROW_STYLE, base,
        format_amount,
    },
    navigation::NavBar,
    select_option::{Dropdown, DropdownSources, OptionId},
    transaction::{Transaction, TransactionType},
};

const COLUMN_COUNT: usize = 8;
const TOTALS_ID: &str = "overview-totals";

/// Sent with every saved or deleted row so the totals reload themselves.
pub(crate) const TRANSACTIONS_CHANGED_EVENT: &str = "transactions-changed";

fn resolved_name_cell(dropdown: &Dropdown, id: Option<OptionId>) -> Markup {
    let field_name = dropdown.kind.field_name();

    html! {
        td class=(TABLE_CELL_STYLE)
        {
            input type="hidden" name=(field_name) value=[id];

            @match (id, dropdown.name_of(id)) {
                (_, Some(name)) => { (name) },
                (Some(id), None) => span class="text-gray-400 dark:text-gray-500" { "#" (id) },
                (None, None) => span class="text-gray-400 dark:text-gray-500" { "-" },
            }
        }
    }
}

/// A table row for `transaction` with inputs for the editable fields.
///
/// The row is not a form, the save button includes the inputs of its row
/// with `hx-include`. Ids that have no name in `sources` are shown as is.
pub(crate) fn transaction_row(transaction: &Transaction, sources: &DropdownSources) -> Markup {
    let endpoint = format_endpoint(endpoints::TRANSACTION_API, transaction.id);
    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
        transaction.name
    );

    html! {
        tr id=(format!("transaction-{}", transaction.id)) class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="text"
                    name="name"
                    value=(transaction.name)
                    required
                    aria-label="Name"
                    class=(TABLE_INPUT_STYLE);
            }

            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="number"
                    name="amount"
                    step="0.01"
                    min="0.01"
                    value=(format!("{:.2}", transaction.amount))
                    required
                    aria-label="Amount"
                    class={ "text-right " (TABLE_INPUT_STYLE) };
            }

            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="date"
                    name="date"
                    value=(transaction.transaction_date)
                    required
                    aria-label="Date"
                    class=(TABLE_INPUT_STYLE);
            }

            td class=(TABLE_CELL_STYLE)
            {
                select name="type_name" aria-label="Type" class=(TABLE_INPUT_STYLE)
                {
                    @for transaction_type in TransactionType::ALL {
                        option
                            value=(transaction_type.as_str())
                            selected[transaction_type == transaction.type_name]
                        {
                            (transaction_type.as_str())
                        }
                    }
                }
            }

            (resolved_name_cell(&sources.categories, transaction.category_id))
            (resolved_name_cell(&sources.payment_methods, transaction.payment_method_id))
            (resolved_name_cell(&sources.currencies, transaction.currency_id))

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        type="button"
                        data-row-save="true"
                        hx-put=(endpoint)
                        hx-include="closest tr"
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        class=(LINK_STYLE)
                    {
                        "Save"
                    }

                    button
                        type="button"
                        hx-delete=(endpoint)
                        hx-confirm=(confirm_message)
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}

/// The income and expense totals below the table.
///
/// The totals fetch themselves again whenever a row is saved or deleted.
fn overview_totals(totals: IncomeExpenseTotals) -> Markup {
    html! {
        p
            id=(TOTALS_ID)
            hx-get=(endpoints::OVERVIEW_TOTALS_API)
            hx-trigger={ (TRANSACTIONS_CHANGED_EVENT) " from:body" }
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="px-6 py-4 font-semibold text-gray-900 dark:text-white"
        {
            "Income " span data-total="income" { (format_amount(totals.income)) }
            " · Expenses " span data-total="expense" { (format_amount(totals.expense)) }
        }
    }
}

fn overview_view(nav_bar: Markup, transactions: &[Transaction], sources: &DropdownSources) -> Markup {
    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl relative overflow-x-auto shadow-md rounded"
            {
                div class="flex items-center justify-between mb-4"
                {
                    h2 class="text-xl font-bold" { "Overview" }

                    // Clicks the save button of every row, see static/app.js.
                    button
                        type="button"
                        data-save-all="true"
                        disabled[transactions.is_empty()]
                        class={ "w-auto! " (BUTTON_SECONDARY_STYLE) }
                    {
                        "Save all"
                    }
                }

                table
                    id="overview-table"
                    class="w-full my-2 text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                            th scope="col" class="px-6 py-3 text-right" { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Payment method" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Currency" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (transaction_row(transaction, sources))
                        }

                        @if transactions.is_empty() {
                            tr
                            {
                                td
                                    colspan=(COLUMN_COUNT)
                                    data-empty-state="true"
                                    class="px-6 py-4 text-center"
                                {
                                    "No transactions yet. "
                                    a href=(endpoints::ROOT) class=(LINK_STYLE) { "Record one" }
                                    " to get started."
                                }
                            }
                        }
                    }
                }

                (overview_totals(IncomeExpenseTotals::from_transactions(transactions)))
            }
        }
    };

    base("Overview", &[], &content)
}

/// Renders the overview table of all transactions.
///
/// Category, payment method and currency IDs are resolved to names with the
/// dropdown sources, which are fetched alongside the transactions.
pub async fn get_overview_page(State(state): State<PageState>) -> Result<Response, Error> {
    let (transactions, sources) = tokio::join!(
        state.backend.get_transactions(),
        DropdownSources::fetch(&state.backend)
    );
    let transactions = transactions
        .inspect_err(|error| tracing::error!("could not load transactions for overview: {error}"))?;

    let nav_bar = NavBar::new(endpoints::OVERVIEW_VIEW, &state.user_name).into_html();

    Ok(overview_view(nav_bar, &transactions, &sources).into_response())
}

/// Renders the current totals of all transactions for the overview table.
pub async fn get_overview_totals(State(backend): State<BackendClient>) -> Response {
    match backend.get_transactions().await {
        Ok(transactions) => {
            overview_totals(IncomeExpenseTotals::from_transactions(&transactions)).into_response()
        }
        Err(error) => {
            tracing::error!("could not load transactions for overview totals: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use scraper::Selector;
    use time::macros::date;

    use crate::{
        app_state::PageState,
        endpoints::{self, format_endpoint},
        select_option::SelectOption,
        test_utils::{
            FakeBackend, FakeBackendData, assert_hx_endpoint, assert_status, assert_valid_html,
            must_select, parse_html_document, parse_html_fragment, text_of,
        },
        transaction::{
            Transaction, TransactionType, get_overview_page, get_overview_totals,
            overview_page::TRANSACTIONS_CHANGED_EVENT,
        },
    };

    fn page_state(backend: &FakeBackend) -> PageState {
        PageState {
            backend: backend.client(),
            user_name: "Alex".to_owned(),
        }
    }

    #[tokio::test]
    async fn lists_transactions_with_resolved_names() {
        let mut groceries =
            Transaction::build(7, date!(2024 - 04 - 02), TransactionType::Expense, 52.3);
        groceries.category_id = Some(1);
        groceries.currency_id = Some(9);
        let backend = FakeBackend::start(FakeBackendData {
            transactions: vec![groceries],
            categories: vec![SelectOption {
                id: 1,
                name: "Food".to_owned(),
            }],
            ..Default::default()
        })
        .await;

        let response = get_overview_page(State(page_state(&backend)))
            .await
            .into_response();

        assert_status(&response, StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let cells = html
            .select(&Selector::parse("tr#transaction-7 td").unwrap())
            .map(|cell| text_of(&cell))
            .collect::<Vec<_>>();
        assert_eq!(cells[4], "Food");
        assert_eq!(cells[5], "-");
        assert_eq!(cells[6], "#9", "unknown ids should be shown as is");

        let amount = must_select(&html, "tr#transaction-7 input[name=amount]");
        assert_eq!(amount.value().attr("value"), Some("52.30"));
    }

    #[tokio::test]
    async fn rows_have_save_and_delete_buttons() {
        let backend = FakeBackend::start(FakeBackendData {
            transactions: vec![Transaction::build(
                3,
                date!(2024 - 01 - 10),
                TransactionType::Income,
                100.0,
            )],
            ..Default::default()
        })
        .await;

        let response = get_overview_page(State(page_state(&backend)))
            .await
            .into_response();
        let html = parse_html_document(response).await;

        let endpoint = format_endpoint(endpoints::TRANSACTION_API, 3);
        let save = must_select(&html, "button[type=\"button\"][hx-put]");
        assert_hx_endpoint(&save, &endpoint, "hx-put");
        assert_eq!(save.value().attr("hx-include"), Some("closest tr"));
        let delete = must_select(&html, "button[type=\"button\"][hx-delete]");
        assert_hx_endpoint(&delete, &endpoint, "hx-delete");
    }

    #[tokio::test]
    async fn shows_empty_state() {
        let backend = FakeBackend::start(FakeBackendData::default()).await;

        let response = get_overview_page(State(page_state(&backend)))
            .await
            .into_response();
        let html = parse_html_document(response).await;

        must_select(&html, "td[data-empty-state]");
        let save_all = must_select(&html, "button[type=\"button\"][data-save-all]");
        assert!(
            save_all.value().attr("disabled").is_some(),
            "there is nothing to save in an empty table"
        );
        assert_eq!(text_of(&must_select(&html, "[data-total=income]")), "0.00");
    }

    #[tokio::test]
    async fn totals_reload_when_transactions_change() {
        let backend = FakeBackend::start(FakeBackendData {
            transactions: vec![
                Transaction::build(1, date!(2024 - 01 - 10), TransactionType::Income, 100.0),
                Transaction::build(2, date!(2024 - 01 - 11), TransactionType::Expense, 1234.5),
            ],
            ..Default::default()
        })
        .await;

        let response = get_overview_page(State(page_state(&backend)))
            .await
            .into_response();
        let html = parse_html_document(response).await;

        let totals = must_select(&html, "#overview-totals");
        assert_hx_endpoint(&totals, endpoints::OVERVIEW_TOTALS_API, "hx-get");
        assert_eq!(
            totals.value().attr("hx-trigger"),
            Some(format!("{TRANSACTIONS_CHANGED_EVENT} from:body").as_str())
        );
        assert_eq!(text_of(&must_select(&html, "[data-total=expense]")), "1,234.50");
        must_select(&html, "button[data-save-all]:not([disabled])");
    }

    #[tokio::test]
    async fn totals_endpoint_reflects_current_transactions() {
        let backend = FakeBackend::start(FakeBackendData {
            transactions: vec![Transaction::build(
                1,
                date!(2024 - 01 - 10),
                TransactionType::Income,
                100.0,
            )],
            ..Default::default()
        })
        .await;
        backend.data().transactions.push(Transaction::build(
            2,
            date!(2024 - 02 - 01),
            TransactionType::Income,
            50.0,
        ));

        let response = get_overview_totals(State(backend.client())).await;

        assert_status(&response, StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(text_of(&must_select(&html, "[data-total=income]")), "150.00");
        assert_eq!(text_of(&must_select(&html, "[data-total=expense]")), "0.00");
    }

    #[tokio::test]
    async fn backend_failure_renders_error_page() {
        let backend = FakeBackend::start(FakeBackendData {
            fail_requests: true,
            ..Default::default()
        })
        .await;

        let response = get_overview_page(State(page_state(&backend)))
            .await
            .into_response();

        assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
