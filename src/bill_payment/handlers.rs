//! Route handlers for the bill payment page and each step of the flow.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Extension, Form,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::html;
use serde::Deserialize;

use crate::{
    AppState, Error, User,
    bill_payment::{
        flow::{BillForm, BillStep},
        view::step_view,
    },
    endpoints,
    html::{FLOW_CONTAINER_ID, PAGE_CONTAINER_STYLE, naira_input_styles},
    latency::simulate_round_trip,
    ledger::{Amount, Ledger, TransactionDraft},
    navigation::app_page,
};

/// The state needed to pay a bill.
#[derive(Debug, Clone)]
pub struct BillPaymentState {
    /// The ledger that paid bills are recorded in.
    pub ledger: Arc<Mutex<Ledger>>,
    /// How long the mocked payment call takes.
    pub latency: Duration,
}

impl FromRef<AppState> for BillPaymentState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            latency: state.latency.payment,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BillPaymentQuery {
    pub category: Option<String>,
}

/// Display the bill payment page.
///
/// The query parameter `category` skips straight to the details step of that category.
pub async fn get_bill_payment_page(
    Query(query): Query<BillPaymentQuery>,
    Extension(user): Extension<User>,
) -> Response {
    let step = BillStep::start(query.category.as_deref());

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div id=(FLOW_CONTAINER_ID) class="w-full max-w-lg"
            {
                (step_view(&step))
            }
        }
    };

    app_page(
        "Bill Payment",
        endpoints::BILL_PAYMENT_VIEW,
        &user,
        &[naira_input_styles()],
        &content,
    )
    .into_response()
}

/// Move from the category step to the details step of the chosen category.
pub async fn post_bill_category(Form(form): Form<BillForm>) -> Response {
    step_view(&BillStep::start(Some(&form.category))).into_response()
}

/// Re-render the details step, e.g. to show the plans of a newly selected provider.
pub async fn post_bill_form(Form(form): Form<BillForm>) -> Response {
    step_view(&BillStep::edit(form)).into_response()
}

/// Validate the bill details and show the confirmation step, or the details
/// step with the validation messages.
pub async fn post_bill_details(Form(form): Form<BillForm>) -> Response {
    step_view(&BillStep::submit_details(form)).into_response()
}

/// Go back from the confirmation step to the details step, keeping the values entered.
pub async fn post_bill_edit(Form(form): Form<BillForm>) -> Response {
    step_view(&BillStep::edit(form)).into_response()
}

/// Pay the bill and record it in the ledger as a debit.
///
/// The details are validated again since they come back from the client.
/// If they are no longer valid, the details step is shown with the messages.
pub async fn post_bill_confirm(
    State(state): State<BillPaymentState>,
    Form(form): Form<BillForm>,
) -> Response {
    let payment = match BillStep::submit_details(form) {
        BillStep::Confirm { payment, .. } => payment,
        step => return step_view(&step).into_response(),
    };

    simulate_round_trip("pay bill", state.latency).await;

    let amount = match Amount::new(payment.amount) {
        Ok(amount) => amount,
        Err(error) => return error.into_alert_response(),
    };
    let draft = TransactionDraft::debit(amount, &payment.description());

    let transaction = match state.ledger.lock() {
        Ok(mut ledger) => ledger.add_transaction(draft),
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    tracing::info!(
        "Paid {} bill of {} to {}",
        payment.category.as_str(),
        payment.amount,
        payment.provider.name
    );
    tracing::debug!("Recorded bill payment as transaction {}", transaction.id);

    step_view(&BillStep::Success).into_response()
}
