use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-900 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-800 \
    hover:enabled:dark:bg-blue-700 text-white rounded text-center";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full py-2 px-4 \
    text-sm font-medium text-gray-900 bg-white rounded border border-gray-200 \
    hover:bg-gray-100 hover:text-blue-700 focus:z-10 dark:bg-gray-800 \
    dark:text-gray-400 dark:border-gray-600 dark:hover:text-white \
    dark:hover:bg-gray-700 text-center";

pub const BUTTON_DANGER_STYLE: &str = "px-3 py-1.5 text-sm font-medium text-white \
    bg-red-600 hover:bg-red-700 rounded";

pub const BUTTON_SMALL_SECONDARY_STYLE: &str = "px-3 py-1.5 text-sm font-medium \
    text-gray-900 bg-white rounded border border-gray-200 hover:bg-gray-100 \
    dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto lg:py-0 max-w-2xl text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";
pub const FORM_ERROR_STYLE: &str = "text-red-500 text-base";

// Card (the UI panel, not the bank card) styles
pub const PANEL_STYLE: &str = "w-full bg-white rounded-lg shadow dark:border \
    dark:bg-gray-800 dark:border-gray-700 p-6 space-y-4";
pub const PANEL_TITLE_STYLE: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const PANEL_DESCRIPTION_STYLE: &str = "text-sm text-gray-500 dark:text-gray-400";

// Summary rows on the confirmation steps
pub const SUMMARY_ROW_STYLE: &str = "flex justify-between mb-2";
pub const SUMMARY_LABEL_STYLE: &str = "text-gray-600 dark:text-gray-400";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

/// The ID of the element that is swapped out by each step of a flow.
pub const FLOW_CONTAINER_ID: &str = "flow";
/// The CSS selector for [FLOW_CONTAINER_ID].
pub const FLOW_TARGET: &str = "#flow";

/// Extra elements for the `head` of a page.
pub enum HeadElement {
    Style(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Moopa Bank" }
                link rel="icon" type="image/svg+xml" href="/static/logo.svg";

                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.js" {}

                style
                {
                    r#"
                    .htmx-indicator {
                        display: none;
                    }

                    .htmx-request .htmx-indicator, .htmx-request.htmx-indicator {
                        display: inline;
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900 pb-[calc(5rem+env(safe-area-inset-bottom))] lg:pb-0"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 6rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-900 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-900
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// The layout shared by the log-in and registration pages.
pub fn log_in_register(form_title: &str, subtitle: &str, form: &Markup) -> Markup {
    html! {
        div class="min-h-screen bg-gradient-to-br from-blue-900 to-blue-700 flex flex-col justify-center px-4 py-8"
        {
            div class="flex flex-col items-center mb-6 text-white"
            {
                img class="w-12 h-12 mb-2" src="/static/logo.svg" alt="Moopa Bank logo";
                span class="text-2xl font-semibold" { "Moopa Bank" }
                span class="text-sm text-blue-100" { (subtitle) }
            }

            div class="w-full bg-white rounded-lg shadow mx-auto sm:max-w-md dark:bg-gray-800"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h1 class="text-xl font-bold leading-tight tracking-tight text-gray-900 md:text-2xl dark:text-white"
                    {
                        (form_title)
                    }

                    (form)
                }
            }
        }
    }
}

/// The configuration for a labelled input with an optional error message.
pub struct InputField<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub type_: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub required: bool,
    pub disabled: bool,
}

impl<'a> InputField<'a> {
    /// A required text input with no value.
    pub fn new(name: &'a str, label: &'a str) -> Self {
        Self {
            name,
            label,
            type_: "text",
            value: "",
            error: None,
            placeholder: None,
            required: true,
            disabled: false,
        }
    }

    pub fn type_(mut self, type_: &'a str) -> Self {
        self.type_ = type_;
        self
    }

    pub fn value(mut self, value: &'a str) -> Self {
        self.value = value;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn into_html(self) -> Markup {
        html! {
            div
            {
                label for=(self.name) class=(FORM_LABEL_STYLE) { (self.label) }

                input
                    type=(self.type_)
                    name=(self.name)
                    id=(self.name)
                    value=(self.value)
                    placeholder=[self.placeholder]
                    required[self.required]
                    disabled[self.disabled]
                    autofocus[self.error.is_some()]
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error(self.error))
            }
        }
    }
}

/// A paragraph with the validation message for a form field, if any.
pub fn field_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(error) = error {
            p class=(FORM_ERROR_STYLE) { (error) }
        }
    }
}

/// A select element where `options` are pairs of (value, label).
///
/// An empty first option with `placeholder` as its label is always included.
pub fn select_field(
    name: &str,
    label: &str,
    placeholder: &str,
    options: &[(&str, &str)],
    selected: &str,
    error: Option<&str>,
) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            select name=(name) id=(name) required class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { (placeholder) }

                @for (value, option_label) in options {
                    option value=(value) selected[*value == selected] { (option_label) }
                }
            }

            (field_error(error))
        }
    }
}

/// A hidden input for carrying a value over to the next step of a flow.
pub fn hidden_input(name: &str, value: &str) -> Markup {
    html! {
        input type="hidden" name=(name) value=(value);
    }
}

/// A submit button with a loading spinner that shows while the request is in flight.
pub fn submit_button(text: &str) -> Markup {
    html! {
        button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
        {
            span class="inline htmx-indicator" id="indicator"
            {
                (loading_spinner())
            }
            (text)
        }
    }
}

/// A row of the summary shown on confirmation steps.
pub fn summary_row(label: &str, value: &str) -> Markup {
    html! {
        div class=(SUMMARY_ROW_STYLE)
        {
            span class=(SUMMARY_LABEL_STYLE) { (label) }
            span class="font-medium" { (value) }
        }
    }
}

/// The green tick and message shown on the last step of a flow.
pub fn success_banner(title: &str, message: &str) -> Markup {
    html! {
        div class="w-16 h-16 bg-green-100 rounded-full mx-auto flex items-center justify-center mb-4 text-green-600 text-3xl"
        {
            "✓"
        }

        h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2" { (title) }
        p class="text-gray-600 dark:text-gray-400 mb-6" { (message) }
    }
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Returns the CSS styles for adding a naira sign prefix to number inputs.
/// Used for currency input fields across multiple forms.
pub fn naira_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
        }
        .input-wrapper input[type="number"] {
            padding-left: 1.6rem;
        }
        .input-wrapper::before {
            content: '₦';
            position: absolute;
            left: 0.6rem;
            bottom: 0.7rem;
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}

/// Format `number` as naira with two decimal places, e.g. "₦15,000.00".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("₦")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-₦")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "₦0.00".to_owned();
    };

    pad_to_two_decimals(formatted_string)
}

/// numfmt drops trailing zeros, e.g. "12.30" is rendered as "12.3" and "5.00"
/// may be rendered as "5", so pad the fraction back out to two digits.
fn pad_to_two_decimals(formatted_string: String) -> String {
    match formatted_string.split_once('.') {
        Some((whole, fraction)) => format!("{whole}.{fraction:0<2}"),
        None => format!("{formatted_string}.00"),
    }
}

/// Date format for transactions, e.g. "Oct 3, 2024".
const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Format the date part of `date_time` in the timezone `local_offset`.
pub fn format_date(date_time: OffsetDateTime, local_offset: UtcOffset) -> String {
    date_time
        .to_offset(local_offset)
        .format(DATE_FORMAT)
        .unwrap_or_else(|error| {
            tracing::error!("Could not format date {date_time}: {error}");
            date_time.date().to_string()
        })
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE) { (text) }
    )
}
