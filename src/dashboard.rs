//! The landing page for signed in users: balance, quick actions and recent transactions.

use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    Error, User,
    bill_payment::BillCategory,
    endpoints,
    html::{PANEL_STYLE, format_currency},
    navigation::app_page,
    transactions_page::{TransactionsViewState, transaction_list},
};

/// How many transactions to show on the dashboard.
const RECENT_TRANSACTION_COUNT: usize = 5;

/// Redirect the root path to the dashboard.
pub async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

fn balance_card(user: &User) -> Markup {
    html! {
        div class="rounded-lg shadow bg-gradient-to-r from-blue-900 to-blue-700 text-white px-6 py-6 sm:py-8"
        {
            div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4"
            {
                div
                {
                    h3 class="text-sm sm:text-base text-blue-100" { "Available Balance" }
                    p id="balance" class="text-2xl sm:text-3xl font-bold mt-1"
                    {
                        (format_currency(user.balance))
                    }
                    p class="text-sm text-blue-100 mt-1"
                    {
                        "Account Number: " (user.account_number)
                    }
                }

                // Funding is not part of the demo.
                button
                    type="button"
                    disabled
                    class="w-full sm:w-auto px-3 py-1.5 text-sm rounded-lg border border-white/20 bg-white/10"
                {
                    "Fund Account"
                }
            }
        }
    }
}

fn quick_actions() -> Markup {
    let bill_payment_link =
        |category: BillCategory| format!("{}?category={}", endpoints::BILL_PAYMENT_VIEW, category.as_str());

    let actions = [
        ("Transfer", endpoints::TRANSFER_VIEW.to_owned(), "bg-blue-100 text-blue-900"),
        ("Airtime", bill_payment_link(BillCategory::Airtime), "bg-purple-100 text-purple-900"),
        ("Data", bill_payment_link(BillCategory::Data), "bg-green-100 text-green-900"),
        ("TV Sub", bill_payment_link(BillCategory::Tv), "bg-amber-100 text-amber-900"),
    ];

    html! {
        div class="grid grid-cols-2 md:grid-cols-4 gap-3 sm:gap-4"
        {
            @for (label, url, style) in actions {
                a href=(url) class={"hover:shadow-md " (PANEL_STYLE)}
                {
                    div class="flex flex-col items-center justify-center p-6"
                    {
                        div class={"w-12 h-12 rounded-full flex items-center justify-center mb-3 font-bold " (style)}
                        {
                            (label.chars().next().unwrap_or_default())
                        }
                        p class="text-sm font-medium text-gray-900 dark:text-white" { (label) }
                    }
                }
            }
        }
    }
}

/// Display the balance of the signed in user and their most recent transactions.
pub async fn get_dashboard_page(
    State(state): State<TransactionsViewState>,
    Extension(user): Extension<User>,
) -> Result<Response, Error> {
    let local_offset = state.local_offset()?;
    let transactions = state.read_transactions(|ledger| {
        ledger
            .recent_transactions(RECENT_TRANSACTION_COUNT)
            .cloned()
            .collect()
    })?;

    let first_name = user.name.split_whitespace().next().unwrap_or(&user.name);

    let content = html! {
        div class="space-y-6 max-w-5xl mx-auto"
        {
            p class="text-gray-600 dark:text-gray-300" { "Welcome back, " (first_name) }

            (balance_card(&user))

            (quick_actions())

            div
            {
                div class="flex items-center justify-between mb-3"
                {
                    h2 class="text-lg font-semibold text-gray-900 dark:text-white" { "Recent Transactions" }
                    a
                        href=(endpoints::TRANSACTIONS_VIEW)
                        class="text-sm font-medium text-blue-900 dark:text-blue-300"
                    {
                        "View All"
                    }
                }

                (transaction_list(&transactions, local_offset))
            }
        }
    };

    Ok(app_page("Dashboard", endpoints::DASHBOARD_VIEW, &user, &[], &content).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        Extension,
        extract::{FromRef, State},
    };
    use scraper::Selector;

    use crate::{
        endpoints,
        ledger::{Amount, TransactionDraft},
        test_utils::{
            assert_status_ok, assert_valid_html, parse_html_document, test_app_state, test_user,
        },
        transactions_page::TransactionsViewState,
    };

    use super::get_dashboard_page;

    #[tokio::test]
    async fn dashboard_shows_balance_and_account_number() {
        let state = TransactionsViewState::from_ref(&test_app_state());

        let response = get_dashboard_page(State(state), Extension(test_user()))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let balance = html
            .select(&Selector::parse("#balance").unwrap())
            .next()
            .expect("want balance")
            .text()
            .collect::<String>();
        assert!(balance.trim().starts_with('₦'), "got {balance}");
        assert!(html.root_element().html().contains("202412345678"));
    }

    #[tokio::test]
    async fn dashboard_shows_five_most_recent_transactions() {
        let app_state = test_app_state();
        {
            let mut ledger = app_state.ledger.lock().unwrap();
            for i in 0..4 {
                ledger.add_transaction(TransactionDraft::debit(
                    Amount::new(100.0).unwrap(),
                    &format!("Bill {i}"),
                ));
            }
        }
        let state = TransactionsViewState::from_ref(&app_state);

        let response = get_dashboard_page(State(state), Extension(test_user()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let descriptions = html
            .select(&Selector::parse("li p.font-medium").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(
            descriptions,
            ["Bill 3", "Bill 2", "Bill 1", "Bill 0", "Transfer to Jane"]
        );
    }

    #[tokio::test]
    async fn quick_actions_link_to_flows() {
        let state = TransactionsViewState::from_ref(&test_app_state());

        let response = get_dashboard_page(State(state), Extension(test_user()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let hrefs = html
            .select(&Selector::parse("a[href]").unwrap())
            .filter_map(|a| a.value().attr("href"))
            .collect::<Vec<_>>();
        for want in [
            endpoints::TRANSFER_VIEW,
            "/bill-payment?category=airtime",
            "/bill-payment?category=data",
            "/bill-payment?category=tv",
            endpoints::TRANSACTIONS_VIEW,
        ] {
            assert!(hrefs.contains(&want), "want link to {want}, got {hrefs:?}");
        }
    }
}
