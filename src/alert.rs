//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped into the `#alert-container` element of the base layout,
//! either as the target of a failed htmx request or as an out-of-band swap
//! alongside a successful response.

use maud::{Markup, html};

/// An alert message with a title and some details.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Tell the user an operation succeeded.
    Success {
        /// The alert title.
        message: String,
        /// Extra information shown under the title.
        details: String,
    },
    /// Tell the user an operation failed.
    Error {
        /// The alert title.
        message: String,
        /// Extra information shown under the title, e.g., how to fix the problem.
        details: String,
    },
}

impl Alert {
    fn content(&self) -> Markup {
        let (message, details, container_style, icon) = match self {
            Alert::Success { message, details } => (
                message,
                details,
                "flex items-start gap-3 p-4 mb-4 text-sm text-green-800 rounded-lg \
                bg-green-50 dark:bg-gray-800 dark:text-green-400 shadow",
                "✓",
            ),
            Alert::Error { message, details } => (
                message,
                details,
                "flex items-start gap-3 p-4 mb-4 text-sm text-red-800 rounded-lg \
                bg-red-50 dark:bg-gray-800 dark:text-red-400 shadow",
                "!",
            ),
        };

        html! {
            div class=(container_style) role="alert"
            {
                span class="font-bold" { (icon) }

                div class="flex-1"
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }

                button
                    type="button"
                    class="font-bold"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        }
    }

    /// Render the alert as the contents of the alert container.
    pub fn into_html(self) -> Markup {
        self.content()
    }

    /// Render the alert so that htmx swaps it into the alert container
    /// regardless of the request's target.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 6rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                (self.content())
            }
        }
    }
}
