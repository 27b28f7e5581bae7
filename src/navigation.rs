//! This file defines the navigation bar and the page layout shared by the banking pages.

use maud::{Markup, html};

use crate::{
    User, endpoints,
    html::{HeadElement, base},
};

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_sidebar_html(self) -> Markup {
        let style = if self.is_current {
            "flex items-center w-full px-4 py-3 rounded-lg bg-blue-800 text-white"
        } else {
            "flex items-center w-full px-4 py-3 rounded-lg text-blue-100
            hover:bg-blue-800 hover:text-white"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }

    fn into_bottom_html(self) -> Markup {
        let style = if self.is_current {
            "flex flex-1 flex-col items-center py-2 px-1 text-xs font-medium text-blue-900"
        } else {
            "flex flex-1 flex-col items-center py-2 px-1 text-xs font-medium
            text-gray-500 hover:text-blue-900"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                span class="truncate" { (self.title) }
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
    user: &'a User,
}

impl<'a> NavBar<'a> {
    /// Get the navigation bar for `user`.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str, user: &'a User) -> NavBar<'a> {
        let links = [
            (endpoints::DASHBOARD_VIEW, "Dashboard"),
            (endpoints::TRANSFER_VIEW, "Transfer"),
            (endpoints::BILL_PAYMENT_VIEW, "Bill Payment"),
            (endpoints::CARDS_VIEW, "Cards"),
            (endpoints::SETTINGS_VIEW, "Settings"),
        ]
        .into_iter()
        .map(|(url, title)| Link {
            url,
            title,
            is_current: active_endpoint == url,
        })
        .collect();

        NavBar { links, user }
    }

    pub fn into_html(self) -> Markup {
        html!(
            aside class="hidden md:flex md:w-64 flex-col bg-blue-900 text-white"
            {
                a href=(endpoints::DASHBOARD_VIEW) class="flex items-center gap-3 p-5 border-b border-blue-800"
                {
                    img src="/static/logo.svg" alt="Moopa Bank logo" class="h-10";
                    span class="text-xl font-semibold" { "Moopa Bank" }
                }

                div class="p-4 border-b border-blue-800"
                {
                    p class="font-semibold" { (self.user.name) }
                    p class="text-sm text-blue-200" { (self.user.account_number) }
                }

                nav class="flex-1 p-4"
                {
                    ul class="space-y-2"
                    {
                        @for link in self.links.iter().cloned() {
                            li { (link.into_sidebar_html()) }
                        }
                    }
                }

                div class="p-4 border-t border-blue-800"
                {
                    a
                        href=(endpoints::LOG_OUT)
                        class="flex items-center w-full px-4 py-3 text-blue-100 hover:bg-blue-800 hover:text-white rounded-lg"
                    {
                        "Logout"
                    }
                }
            }

            nav class="md:hidden fixed inset-x-0 bottom-0 z-40 bg-white border-t border-gray-200 dark:bg-gray-900 dark:border-gray-700"
                aria-label="Primary"
            {
                div class="flex justify-between px-2 py-2"
                {
                    @for link in self.links {
                        (link.into_bottom_html())
                    }
                }
            }
        )
    }
}

/// The layout of the pages shown to a signed in user: the navigation bar, a
/// header with the page title and the page content.
pub fn app_page(
    title: &str,
    active_endpoint: &str,
    user: &User,
    head_elements: &[HeadElement],
    content: &Markup,
) -> Markup {
    let content = html!(
        div class="flex min-h-screen bg-gray-50 dark:bg-gray-900"
        {
            (NavBar::new(active_endpoint, user).into_html())

            div class="flex-1 flex flex-col"
            {
                header class="bg-white shadow-sm dark:bg-gray-800"
                {
                    div class="flex items-center justify-between px-3 sm:px-4 py-2 sm:py-3"
                    {
                        h1 class="text-lg sm:text-xl font-semibold text-gray-800 dark:text-white"
                        {
                            (title)
                        }

                        a
                            href=(endpoints::LOG_OUT)
                            class="md:hidden px-3 py-2 text-sm font-medium text-white bg-blue-900 rounded-lg hover:bg-blue-800"
                        {
                            "Logout"
                        }
                    }
                }

                main class="flex-1 p-3 pb-24 sm:p-4 md:p-6"
                {
                    (content)
                }
            }
        }
    );

    base(title, head_elements, &content)
}
