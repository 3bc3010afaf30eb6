//! The home page with the form for recording a new transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    app_state::PageState,
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    select_option::{CATEGORY_MODAL, DropdownSources, PAYMENT_METHOD_MODAL},
    transaction::form::transaction_form,
};

fn home_view(nav_bar: Markup, sources: &DropdownSources, today: Date) -> Markup {
    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            (transaction_form(sources, today))
        }

        (CATEGORY_MODAL.into_html())
        (PAYMENT_METHOD_MODAL.into_html())
    };

    base("New Transaction", &[], &content)
}

/// Renders the home page.
///
/// The three dropdown sources are fetched concurrently and a source that
/// fails is shown as an empty dropdown with a note.
pub async fn get_home_page(State(state): State<PageState>) -> Response {
    let sources = DropdownSources::fetch(&state.backend).await;
    let nav_bar = NavBar::new(endpoints::ROOT, &state.user_name).into_html();
    let today = OffsetDateTime::now_utc().date();

    home_view(nav_bar, &sources, today).into_response()
}
