//! Chart generation and rendering for the dashboard.
//!
//! Three ECharts visualizations are built for the selected year:
//! - **Income vs. expenses**: the yearly totals side by side
//! - **Monthly income**: income per calendar month
//! - **Monthly expenses**: expenses per calendar month
//!
//! Each chart is serialized to an ECharts option object and initialized by an
//! inline script next to its container, so the charts also render after an
//! htmx swap.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip,
        Trigger,
    },
    series::{Line, bar},
};
use maud::{Markup, PreEscaped, html};

use crate::dashboard::aggregation::{IncomeExpenseTotals, MONTH_LABELS};

/// The URL of the ECharts library the chart options are written for.
pub(super) const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

const INCOME_COLOR: &str = "#16a34a";
const EXPENSE_COLOR: &str = "#dc2626";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID of the chart container.
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the chart containers followed by the script that initializes them.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="chart-container min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }

        script { (PreEscaped(charts_script(charts))) }
    )
}

/// Registers the window listeners shared by all charts.
///
/// The script runs again after every year switch, so the listeners are only
/// added once per page and act on whichever charts are mounted at the time.
const CHART_LISTENERS_SCRIPT: &str = r#"(function() {
    if (window.dashboardChartListeners) {
        return;
    }
    window.dashboardChartListeners = true;

    const mountedCharts = () => Array.from(document.querySelectorAll('.chart-container'))
        .map((chartDom) => echarts.getInstanceByDom(chartDom))
        .filter((chart) => chart);

    window.addEventListener('resize', () => mountedCharts().forEach((chart) => chart.resize()));

    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
    darkModeMediaQuery.addEventListener('change', () => {
        const theme = darkModeMediaQuery.matches ? 'dark' : 'default';
        mountedCharts().forEach((chart) => chart.setTheme(theme));
    });

    document.body.addEventListener('htmx:beforeSwap', (event) => {
        if (event.detail.target.id === 'dashboard-content') {
            mountedCharts().forEach((chart) => chart.dispose());
        }
    });
})();"#;

/// Generates JavaScript initialization code for dashboard charts.
///
/// Charts left over from a previous year are disposed before the new ones
/// are created with the current color scheme.
fn charts_script(charts: &[DashboardChart]) -> String {
    let init_scripts = charts.iter().map(|chart| {
        format!(
            r#"(function() {{
                const chartDom = document.getElementById("{}");
                echarts.getInstanceByDom(chartDom)?.dispose();
                const chart = echarts.init(chartDom);
                const option = {};
                chart.setOption(option);

                const isDarkMode = window.matchMedia('(prefers-color-scheme: dark)').matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }})();"#,
            chart.id, chart.options
        )
    });

    std::iter::once(CHART_LISTENERS_SCRIPT.to_owned())
        .chain(init_scripts)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The income and expense totals of `year` as two bars.
pub(super) fn income_expense_chart(year: i32, totals: IncomeExpenseTotals) -> Chart {
    Chart::new()
        .title(Title::new().text("Income vs. Expenses").subtext(year.to_string()))
        .tooltip(amount_tooltip())
        .legend(Legend::new().right("4%"))
        .grid(default_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(vec![year.to_string()]),
        )
        .y_axis(amount_axis())
        .series(
            bar::Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color(INCOME_COLOR))
                .data(vec![totals.income]),
        )
        .series(
            bar::Bar::new()
                .name("Expenses")
                .item_style(ItemStyle::new().color(EXPENSE_COLOR))
                .data(vec![totals.expense]),
        )
}

/// Income per month of `year`.
pub(super) fn monthly_income_chart(year: i32, monthly_income: [f64; 12]) -> Chart {
    Chart::new()
        .title(Title::new().text("Monthly Income").subtext(year.to_string()))
        .tooltip(amount_tooltip())
        .grid(default_grid())
        .x_axis(month_axis())
        .y_axis(amount_axis())
        .series(
            Line::new()
                .name("Income")
                .item_style(ItemStyle::new().color(INCOME_COLOR))
                .data(monthly_income.to_vec()),
        )
}

/// Expenses per month of `year`.
pub(super) fn monthly_expense_chart(year: i32, monthly_expense: [f64; 12]) -> Chart {
    Chart::new()
        .title(Title::new().text("Monthly Expenses").subtext(year.to_string()))
        .tooltip(amount_tooltip())
        .grid(default_grid())
        .x_axis(month_axis())
        .y_axis(amount_axis())
        .series(
            bar::Bar::new()
                .name("Expenses")
                .item_style(ItemStyle::new().color(EXPENSE_COLOR))
                .data(monthly_expense.to_vec()),
        )
}

fn default_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

fn month_axis() -> Axis {
    Axis::new().type_(AxisType::Category).data(MONTH_LABELS.to_vec())
}

fn amount_axis() -> Axis {
    Axis::new()
        .type_(AxisType::Value)
        .axis_label(AxisLabel::new().formatter(amount_formatter()))
}

// A year may mix currencies, so amounts are shown without a currency symbol.
#[inline]
fn amount_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const amountFormatter = new Intl.NumberFormat('en-US', {
              minimumFractionDigits: 2,
              maximumFractionDigits: 2
            });
            return (number) ? amountFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for amounts
fn amount_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(amount_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::dashboard::aggregation::IncomeExpenseTotals;

    use super::{
        DashboardChart, charts_script, charts_view, income_expense_chart, monthly_expense_chart,
        monthly_income_chart,
    };

    #[test]
    fn charts_view_renders_container_and_script_per_chart() {
        let charts = [
            DashboardChart {
                id: "first",
                options: "{}".to_owned(),
            },
            DashboardChart {
                id: "second",
                options: "{}".to_owned(),
            },
        ];

        let html = Html::parse_fragment(&charts_view(&charts).into_string());

        let ids = html
            .select(&Selector::parse(".chart-container").unwrap())
            .map(|element| element.value().attr("id").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["first", "second"]);

        let script = html
            .select(&Selector::parse("script").unwrap())
            .next()
            .expect("init script missing")
            .inner_html();
        assert!(script.contains("document.getElementById(\"first\")"));
        assert!(script.contains("document.getElementById(\"second\")"));
    }

    #[test]
    fn window_listeners_are_registered_once_for_all_charts() {
        let charts = ["first", "second", "third"].map(|id| DashboardChart {
            id,
            options: "{}".to_owned(),
        });

        let script = charts_script(&charts);

        assert_eq!(script.matches("addEventListener('resize'").count(), 1);
        assert_eq!(script.matches("addEventListener('change'").count(), 1);
        assert!(script.contains("if (window.dashboardChartListeners)"));
        assert_eq!(script.matches("htmx:beforeSwap").count(), 1);
    }

    #[test]
    fn chart_options_contain_data() {
        let totals = IncomeExpenseTotals {
            income: 1500.0,
            expense: 320.25,
        };
        let mut monthly = [0.0; 12];
        monthly[4] = 99.5;

        let totals_options = income_expense_chart(2023, totals).to_string();
        let income_options = monthly_income_chart(2023, monthly).to_string();
        let expense_options = monthly_expense_chart(2023, monthly).to_string();

        assert!(totals_options.contains("320.25"), "got {totals_options}");
        assert!(totals_options.contains("\"2023\""), "got {totals_options}");
        assert!(income_options.contains("\"Jan\""), "got {income_options}");
        assert!(income_options.contains("99.5"), "got {income_options}");
        assert!(expense_options.contains("Monthly Expenses"), "got {expense_options}");
    }
}
