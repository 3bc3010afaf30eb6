//! A short page describing the application.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    app_state::PageState,
    endpoints,
    html::{APP_NAME, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
};

fn about_view(nav_bar: Markup) -> Markup {
    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            article class="max-w-prose space-y-4"
            {
                h2 class="text-xl font-bold" { "About " (APP_NAME) }

                p
                {
                    (APP_NAME) " keeps track of what you earn and spend. "
                    "Record transactions on the " (link(endpoints::ROOT, "home page")) ", "
                    "fix mistakes in the " (link(endpoints::OVERVIEW_VIEW, "overview")) " and "
                    "see how a year went on the " (link(endpoints::DASHBOARD_VIEW, "dashboard")) "."
                }

                p
                {
                    "All data is stored by the finance API this site is connected to. "
                    "Nothing is kept in the browser."
                }
            }
        }
    };

    base("About", &[], &content)
}

/// Renders the about page.
pub async fn get_about_page(State(state): State<PageState>) -> Response {
    let nav_bar = NavBar::new(endpoints::ABOUT_VIEW, &state.user_name).into_html();

    about_view(nav_bar).into_response()
}
