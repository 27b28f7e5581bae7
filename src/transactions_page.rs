//! The page listing every transaction and the transaction list shared with the dashboard.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::UtcOffset;

use crate::{
    AppState, Error, User, endpoints,
    html::{PANEL_STYLE, format_currency, format_date},
    ledger::{Ledger, Transaction, TransactionType},
    navigation::app_page,
    timezone::get_local_offset,
};

/// The state needed for displaying transactions.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The transactions and cards of the signed in user.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Africa/Lagos".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

impl TransactionsViewState {
    /// Clone the transactions picked by `select` out of the ledger.
    ///
    /// The lock is released before returning so rendering does not block other requests.
    pub fn read_transactions(
        &self,
        select: impl FnOnce(&Ledger) -> Vec<Transaction>,
    ) -> Result<Vec<Transaction>, Error> {
        let ledger = self
            .ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::LedgerLockError)?;

        Ok(select(&ledger))
    }

    /// The offset of the configured timezone right now.
    pub fn local_offset(&self) -> Result<UtcOffset, Error> {
        get_local_offset(&self.local_timezone)
            .ok_or_else(|| Error::InvalidTimezoneError(self.local_timezone.clone()))
    }
}

fn transaction_row(transaction: &Transaction, local_offset: UtcOffset) -> Markup {
    let (icon_style, amount_style, sign, arrow) = match transaction.type_ {
        TransactionType::Credit => ("bg-green-100 text-green-600", "text-green-600", "+", "↙"),
        TransactionType::Debit => ("bg-red-100 text-red-600", "text-red-600", "-", "↗"),
    };

    html! {
        li class="flex items-center justify-between p-4 hover:bg-gray-50 dark:hover:bg-gray-700"
        {
            div class="flex items-center"
            {
                div class={"w-10 h-10 rounded-full flex items-center justify-center mr-3 " (icon_style)}
                {
                    (arrow)
                }

                div
                {
                    p class="font-medium text-gray-900 dark:text-white" { (transaction.description) }
                    p class="text-xs text-gray-500"
                    {
                        (format_date(transaction.created_at, local_offset))
                    }
                }
            }

            p class={"font-semibold " (amount_style)} data-type=(match transaction.type_ {
                TransactionType::Credit => "credit",
                TransactionType::Debit => "debit",
            })
            {
                (sign) (format_currency(transaction.amount.as_f64()))
            }
        }
    }
}

/// A card with a row for each transaction, or a message if there are none.
pub fn transaction_list(transactions: &[Transaction], local_offset: UtcOffset) -> Markup {
    html! {
        div class=(PANEL_STYLE)
        {
            @if transactions.is_empty() {
                p class="text-center text-gray-500 py-6" { "No transactions yet" }
            } @else {
                ul class="divide-y divide-gray-100 dark:divide-gray-700"
                {
                    @for transaction in transactions {
                        (transaction_row(transaction, local_offset))
                    }
                }
            }
        }
    }
}

/// Display every transaction, newest first.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    Extension(user): Extension<User>,
) -> Result<Response, Error> {
    let local_offset = state.local_offset()?;
    let transactions =
        state.read_transactions(|ledger| ledger.transactions().cloned().collect())?;

    let content = html! {
        div class="space-y-4 max-w-3xl mx-auto"
        {
            div class="flex items-center justify-between"
            {
                h2 class="text-lg font-semibold text-gray-900 dark:text-white" { "All Transactions" }
                a href=(endpoints::DASHBOARD_VIEW) class="text-sm text-blue-900 dark:text-blue-300" { "Back to Dashboard" }
            }

            (transaction_list(&transactions, local_offset))
        }
    };

    Ok(app_page(
        "Transactions",
        endpoints::TRANSACTIONS_VIEW,
        &user,
        &[],
        &content,
    )
    .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        Extension,
        extract::{FromRef, State},
    };
    use scraper::Selector;

    use crate::{
        Error,
        test_utils::{
            assert_status_ok, assert_valid_html, parse_html_document, test_app_state, test_user,
        },
    };

    use super::{TransactionsViewState, get_transactions_page};

    #[tokio::test]
    async fn lists_every_transaction_newest_first() {
        let state = TransactionsViewState {
            ledger: test_app_state().ledger,
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = get_transactions_page(State(state), Extension(test_user()))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let descriptions = html
            .select(&Selector::parse("li p.font-medium").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(
            descriptions,
            ["Transfer to Jane", "Airtime Purchase", "Salary Payment"]
        );

        let dates = html
            .select(&Selector::parse("li p.text-xs").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(dates[0], "Oct 3, 2024");
    }

    #[tokio::test]
    async fn credits_and_debits_are_signed() {
        let state = TransactionsViewState::from_ref(&test_app_state());

        let response = get_transactions_page(State(state), Extension(test_user()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let credit = html
            .select(&Selector::parse("p[data-type=credit]").unwrap())
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        let debit = html
            .select(&Selector::parse("p[data-type=debit]").unwrap())
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        assert!(credit.starts_with("+₦"), "got {credit}");
        assert!(debit.starts_with("-₦"), "got {debit}");
        assert!(credit.ends_with(".00"), "got {credit}");
    }

    #[tokio::test]
    async fn invalid_timezone_is_error() {
        let state = TransactionsViewState {
            ledger: test_app_state().ledger,
            local_timezone: "Atlantis/Capital".to_owned(),
        };

        let result = get_transactions_page(State(state), Extension(test_user())).await;

        assert_eq!(
            result.err(),
            Some(Error::InvalidTimezoneError("Atlantis/Capital".to_owned()))
        );
    }
}
