//! Alert messages for reporting the outcome of htmx requests.
//!
//! Alerts are rendered into the `#alert-container` element of the base
//! template, either as the target of `hx-target-error` or with an
//! out-of-band swap next to a successful response.

use maud::{Markup, html};

/// A dismissable success or error message.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The request succeeded.
    Success {
        /// The headline.
        message: String,
        /// Additional information shown below the headline.
        details: String,
    },
    /// The request failed.
    Error {
        /// The headline.
        message: String,
        /// What went wrong and how the user may fix it.
        details: String,
    },
}

impl Alert {
    /// Create a new success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert on its own, to be placed inside the alert container.
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => (
                "text-green-800 border-green-300 bg-green-50 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "text-red-800 border-red-300 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                message,
                details,
            ),
        };

        // Template adapted from https://flowbite.com/docs/components/alerts/
        html! {
            div
                role="alert"
                class={ "flex items-start p-4 mb-4 text-sm border rounded-lg shadow " (style) }
            {
                div class="grow"
                {
                    span class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                    class="ms-3 -my-1.5 p-1.5 rounded-lg hover:opacity-75"
                {
                    "✕"
                }
            }
        }
    }

    /// Render the alert inside a replacement alert container for an
    /// out-of-band swap.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                (self.into_html())
            }
        }
    }
}
