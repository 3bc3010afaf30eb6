#![allow(missing_docs)]

pub(crate) mod fake_backend;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use fake_backend::{FakeBackend, FakeBackendData};
pub(crate) use form::{
    assert_form_error_message, assert_form_input, assert_hx_endpoint, assert_selected_option,
    must_get_form,
};
pub(crate) use html::{
    assert_valid_html, must_select, parse_html_document, parse_html_fragment, parse_table_rows,
    text_of,
};
pub(crate) use http::{assert_content_type, assert_status, get_header};
