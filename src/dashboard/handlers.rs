//! Dashboard HTTP handlers and view rendering.
//!
//! The full page is rendered for normal requests. Requests made by htmx when
//! the year is switched get only the content inside `#dashboard-content`.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxHistoryRestoreRequest, HxRequest};
use maud::{Markup, html};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    Error,
    app_state::PageState,
    backend::BackendClient,
    dashboard::{
        aggregation::{IncomeExpenseTotals, YearList, monthly_totals},
        cards::summary_cards_view,
        charts::{
            DashboardChart, ECHARTS_URL, charts_view, income_expense_chart, monthly_expense_chart,
            monthly_income_chart,
        },
    },
    endpoints::{self, dashboard_for_year},
    html::{DROPDOWN_MENU_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement, base, link},
    navigation::NavBar,
    transaction::{Transaction, TransactionType},
};

const CONTENT_ID: &str = "dashboard-content";

/// The query parameters of the dashboard page.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// The year to show, defaults to the newest year with transactions.
    pub year: Option<i32>,
}

/// Holds all the data needed to render the dashboard content.
struct DashboardData {
    year: i32,
    years: YearList,
    totals: IncomeExpenseTotals,
    charts: [DashboardChart; 3],
    has_transactions: bool,
}

impl DashboardData {
    fn new(year: i32, years: YearList, transactions: &[Transaction]) -> Self {
        let totals = IncomeExpenseTotals::from_transactions(transactions);

        Self {
            year,
            years,
            totals,
            charts: build_dashboard_charts(year, totals, transactions),
            has_transactions: !transactions.is_empty(),
        }
    }
}

/// Creates the array of dashboard charts from transaction data.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(
    year: i32,
    totals: IncomeExpenseTotals,
    transactions: &[Transaction],
) -> [DashboardChart; 3] {
    [
        DashboardChart {
            id: "incomeExpenseChart",
            options: income_expense_chart(year, totals).to_string(),
        },
        DashboardChart {
            id: "monthlyIncomeChart",
            options: monthly_income_chart(
                year,
                monthly_totals(transactions, TransactionType::Income),
            )
            .to_string(),
        },
        DashboardChart {
            id: "monthlyExpenseChart",
            options: monthly_expense_chart(
                year,
                monthly_totals(transactions, TransactionType::Expense),
            )
            .to_string(),
        },
    ]
}

/// Fetch the years and the transactions of the requested year.
///
/// Without a requested year the year list has to be known first to pick the
/// newest year, otherwise both requests are made concurrently.
async fn fetch_dashboard_data(
    backend: &BackendClient,
    requested_year: Option<i32>,
) -> Result<DashboardData, Error> {
    let (year, years, transactions) = match requested_year {
        Some(year) => {
            let (years, transactions) = tokio::try_join!(
                backend.get_years(),
                backend.get_dashboard_transactions(year)
            )?;

            (year, YearList::new(years), transactions)
        }
        None => {
            let years = YearList::new(backend.get_years().await?);
            let year = years.default_year(OffsetDateTime::now_utc().year());
            let transactions = backend.get_dashboard_transactions(year).await?;

            (year, years, transactions)
        }
    };

    tracing::debug!(
        "loaded {} transactions for the {year} dashboard",
        transactions.len()
    );

    Ok(DashboardData::new(year, years, &transactions))
}

/// Display the dashboard for the year in the query, or the newest year.
///
/// Year switches made by htmx get only the dashboard content. When htmx
/// restores a page missing from its history cache it needs the full page.
pub async fn get_dashboard_page(
    State(state): State<PageState>,
    HxRequest(is_htmx_request): HxRequest,
    HxHistoryRestoreRequest(is_history_restore): HxHistoryRestoreRequest,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let data = fetch_dashboard_data(&state.backend, query.year)
        .await
        .inspect_err(|error| tracing::error!("could not load dashboard: {error}"));
    let wants_partial = is_htmx_request && !is_history_restore;

    let response = match (data, wants_partial) {
        (Ok(data), true) => dashboard_content(&data).into_response(),
        (Ok(data), false) => {
            let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW, &state.user_name);
            dashboard_view(nav_bar, &data).into_response()
        }
        (Err(error), true) => error.into_alert_response(),
        (Err(error), false) => error.into_response(),
    };

    ([(header::VARY, "HX-Request")], response).into_response()
}

fn year_dropdown(selected_year: i32, years: &YearList) -> Markup {
    html! {
        div class="relative w-40"
        {
            button
                type="button"
                data-bs-toggle="dropdown"
                aria-expanded="false"
                class={ "dropdown-toggle " (FORM_TEXT_INPUT_STYLE) }
            {
                (selected_year)
            }

            ul class={ "dropdown-menu hidden " (DROPDOWN_MENU_STYLE) }
            {
                @for &year in years.years().iter().rev() {
                    @let url = dashboard_for_year(year);

                    li
                    {
                        a
                            href=(url)
                            hx-get=(url)
                            hx-target={ "#" (CONTENT_ID) }
                            hx-swap="innerHTML"
                            hx-sync={ "#" (CONTENT_ID) ":replace" }
                            hx-push-url="true"
                            hx-target-error="#alert-container"
                            aria-current=[(year == selected_year).then_some("true")]
                            class="dropdown-item block px-3 py-1 hover:bg-gray-100 dark:hover:bg-gray-600"
                        {
                            (year)
                        }
                    }
                }
            }
        }
    }
}

/// Renders the content that is swapped when the year changes.
fn dashboard_content(data: &DashboardData) -> Markup {
    html! {
        div class="w-full flex items-center justify-between mb-6"
        {
            h2 class="text-xl font-bold" { "Dashboard " (data.year) }

            (year_dropdown(data.year, &data.years))
        }

        @if !data.has_transactions {
            p data-empty-state="true" class="w-full mb-4"
            {
                "There are no transactions in " (data.year) " yet. "
                "Charts will show up here once you "
                (link(endpoints::ROOT, "add some transactions")) "."
            }
        }

        (summary_cards_view(data.totals))
        (charts_view(&data.charts))
    }
}

/// Renders the main dashboard page with the year menu, cards and charts.
fn dashboard_view(nav_bar: NavBar<'_>, data: &DashboardData) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id=(CONTENT_ID)
            class="container-md flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (dashboard_content(data))
        }
    );

    let scripts = [HeadElement::ScriptLink(ECHARTS_URL.to_owned())];

    base("Dashboard", &scripts, &content)
}
