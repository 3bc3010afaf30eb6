//! Dropdown controls populated from the finance API.

use maud::{Markup, html};

use crate::{
    backend::BackendClient,
    html::{DROPDOWN_MENU_STYLE, FORM_RADIO_INPUT_STYLE, FORM_TEXT_INPUT_STYLE},
    select_option::{OptionId, OptionKind, SelectOption},
};

/// The options of one dropdown source.
///
/// A source that failed to load is still rendered, empty and with a note, so
/// the rest of the page keeps working.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    /// Which source the options came from.
    pub kind: OptionKind,
    /// The options in the order the finance API returned them.
    pub options: Vec<SelectOption>,
    /// Whether loading the options failed.
    pub is_unavailable: bool,
}

impl Dropdown {
    /// A dropdown with the given options.
    pub fn loaded(kind: OptionKind, options: Vec<SelectOption>) -> Self {
        Self {
            kind,
            options,
            is_unavailable: false,
        }
    }

    /// A dropdown whose source could not be loaded.
    pub fn unavailable(kind: OptionKind) -> Self {
        Self {
            kind,
            options: Vec::new(),
            is_unavailable: true,
        }
    }

    /// Fetch the options of `kind`, degrading to [Dropdown::unavailable] on error.
    pub async fn fetch(kind: OptionKind, backend: &BackendClient) -> Self {
        match backend.get_options(kind).await {
            Ok(options) => Self::loaded(kind, options),
            Err(error) => {
                tracing::error!("could not load {} options: {error}", kind.label());
                Self::unavailable(kind)
            }
        }
    }

    /// The name of the option with `id`, if there is one.
    pub fn name_of(&self, id: Option<OptionId>) -> Option<&str> {
        let id = id?;

        self.options
            .iter()
            .find(|option| option.id == id)
            .map(|option| option.name.as_str())
    }

    /// The ID of the most recently added option called `name`.
    pub fn find_newest_by_name(&self, name: &str) -> Option<OptionId> {
        self.options
            .iter()
            .rev()
            .find(|option| option.name == name)
            .map(|option| option.id)
    }
}

/// The three dropdown sources of the transaction form.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownSources {
    /// Categories, e.g. "Groceries".
    pub categories: Dropdown,
    /// Payment methods, e.g. "Cash".
    pub payment_methods: Dropdown,
    /// Currencies, e.g. "EUR".
    pub currencies: Dropdown,
}

impl DropdownSources {
    /// Fetch all three sources concurrently.
    ///
    /// Each source fails independently, see [Dropdown::fetch].
    pub async fn fetch(backend: &BackendClient) -> Self {
        let (categories, payment_methods, currencies) = tokio::join!(
            Dropdown::fetch(OptionKind::Category, backend),
            Dropdown::fetch(OptionKind::PaymentMethod, backend),
            Dropdown::fetch(OptionKind::Currency, backend),
        );

        Self {
            categories,
            payment_methods,
            currencies,
        }
    }
}

fn control_id(kind: OptionKind) -> String {
    format!("{}-control", kind.element_id())
}

fn unavailable_note(dropdown: &Dropdown) -> Markup {
    html! {
        @if dropdown.is_unavailable {
            p class="mt-1 text-sm text-red-600 dark:text-red-400"
            {
                "Could not load the " (dropdown.kind.label().to_lowercase()) " list. Reload the page to try again."
            }
        }
    }
}

/// A `<select>` for `dropdown`, wrapped in a container that can be swapped
/// out-of-band when `swap_oob` is set.
pub fn option_select(dropdown: &Dropdown, selected: Option<OptionId>, swap_oob: bool) -> Markup {
    let kind = dropdown.kind;

    html! {
        div id=(control_id(kind)) class="grow" hx-swap-oob=[swap_oob.then_some("true")]
        {
            select
                id=(kind.element_id())
                name=(kind.field_name())
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Select a " (kind.label().to_lowercase()) }

                @for option in &dropdown.options {
                    @if Some(option.id) == selected {
                        option value=(option.id) selected { (option.name) }
                    } @else {
                        option value=(option.id) { (option.name) }
                    }
                }
            }

            (unavailable_note(dropdown))
        }
    }
}

/// A toggle button with a menu of radio buttons, used for the currency.
///
/// The first option is checked unless `selected` names another one.
pub fn radio_dropdown(dropdown: &Dropdown, selected: Option<OptionId>) -> Markup {
    let kind = dropdown.kind;
    let checked_id = selected.or_else(|| dropdown.options.first().map(|option| option.id));
    let button_label = dropdown
        .name_of(checked_id)
        .unwrap_or(kind.label())
        .to_owned();

    html! {
        div id=(control_id(kind)) class="relative"
        {
            button
                type="button"
                id=(kind.element_id())
                data-bs-toggle="dropdown"
                aria-expanded="false"
                class={ "dropdown-toggle " (FORM_TEXT_INPUT_STYLE) }
            {
                (button_label)
            }

            ul class={ "dropdown-menu hidden " (DROPDOWN_MENU_STYLE) }
            {
                @for option in &dropdown.options {
                    li class="px-3 py-1"
                    {
                        label class="flex items-center gap-2 cursor-pointer"
                        {
                            input
                                type="radio"
                                name=(kind.field_name())
                                value=(option.id)
                                checked[Some(option.id) == checked_id]
                                class=(FORM_RADIO_INPUT_STYLE);

                            (option.name)
                        }
                    }
                }
            }

            (unavailable_note(dropdown))
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        select_option::{
            OptionKind, SelectOption,
            dropdown::{Dropdown, DropdownSources, option_select, radio_dropdown},
        },
        test_utils::{FakeBackend, FakeBackendData},
    };

    fn dropdown(kind: OptionKind) -> Dropdown {
        Dropdown::loaded(
            kind,
            vec![
                SelectOption {
                    id: 1,
                    name: "Item1".to_owned(),
                },
                SelectOption {
                    id: 2,
                    name: "Item2".to_owned(),
                },
            ],
        )
    }

    fn render(markup: maud::Markup) -> Html {
        Html::parse_fragment(&markup.into_string())
    }

    #[test]
    fn select_lists_options_with_selection() {
        let html = render(option_select(&dropdown(OptionKind::Category), Some(2), false));

        let options = html
            .select(&Selector::parse("select#category option").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(options.len(), 3, "want placeholder plus two options");

        let selected = html
            .select(&Selector::parse("option[selected]").unwrap())
            .map(|option| option.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(selected, vec!["Item2"]);
    }

    #[test]
    fn select_can_be_swapped_out_of_band() {
        let html = render(option_select(
            &dropdown(OptionKind::PaymentMethod),
            None,
            true,
        ));

        let control = html
            .select(&Selector::parse("#payment-control").unwrap())
            .next()
            .expect("control wrapper missing");
        assert_eq!(control.value().attr("hx-swap-oob"), Some("true"));
    }

    #[test]
    fn unavailable_dropdown_shows_note() {
        let html = render(option_select(
            &Dropdown::unavailable(OptionKind::Category),
            None,
            false,
        ));

        assert!(html.html().contains("Could not load the category list"));
    }

    #[test]
    fn radio_dropdown_checks_first_option_by_default() {
        let html = render(radio_dropdown(&dropdown(OptionKind::Currency), None));

        let toggle = html
            .select(&Selector::parse("button[data-bs-toggle=\"dropdown\"]").unwrap())
            .next()
            .expect("dropdown toggle missing");
        assert_eq!(toggle.text().collect::<String>().trim(), "Item1");

        let checked = html
            .select(&Selector::parse("input[name=currency_id][checked]").unwrap())
            .map(|input| input.value().attr("value").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(checked, vec!["1"]);
    }

    #[test]
    fn finds_newest_option_by_name() {
        let mut dropdown = dropdown(OptionKind::Category);
        dropdown.options.push(SelectOption {
            id: 7,
            name: "Item1".to_owned(),
        });

        assert_eq!(dropdown.find_newest_by_name("Item1"), Some(7));
        assert_eq!(dropdown.find_newest_by_name("Missing"), None);
        assert_eq!(dropdown.name_of(Some(2)), Some("Item2"));
        assert_eq!(dropdown.name_of(None), None);
    }

    #[tokio::test]
    async fn sources_fail_independently() {
        let backend = FakeBackend::start(FakeBackendData {
            categories: dropdown(OptionKind::Category).options,
            failing_paths: vec!["/paymentMethods".to_owned()],
            ..Default::default()
        })
        .await;

        let sources = DropdownSources::fetch(&backend.client()).await;

        assert_eq!(sources.categories, dropdown(OptionKind::Category));
        assert!(sources.payment_methods.is_unavailable);
        assert!(!sources.currencies.is_unavailable);
    }
}
