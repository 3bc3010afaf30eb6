use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(element: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = element
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got, endpoint,
        "want element with attribute {attribute}=\"{endpoint}\", got {got:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = form
        .select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let input_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(
        input_type, type_,
        "want input {name} with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );
}

/// Assert that the select element with `id` has the option `want_value` selected,
/// or no selected option when `want_value` is `None`.
#[track_caller]
pub(crate) fn assert_selected_option(html: &Html, id: &str, want_value: Option<&str>) {
    let selector = Selector::parse(&format!("select#{id} option[selected]")).unwrap();
    let selected: Vec<_> = html
        .select(&selector)
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect();

    match want_value {
        Some(value) => assert_eq!(
            selected,
            vec![value],
            "want option {value:?} selected in #{id}, got {selected:?}"
        ),
        None => assert!(
            selected.is_empty(),
            "want nothing selected in #{id}, got {selected:?}"
        ),
    }
}

#[track_caller]
pub(crate) fn assert_form_error_message(form: &ElementRef<'_>, want_error_message: &str) {
    let error_message = form
        .select(&Selector::parse("p").unwrap())
        .next()
        .expect("No error message found")
        .text()
        .collect::<String>();

    assert_eq!(want_error_message, error_message.trim());
}
