//! Route handlers for the transfer page and each step of the flow.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Extension, Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error, User, endpoints,
    html::{FLOW_CONTAINER_ID, PAGE_CONTAINER_STYLE, naira_input_styles},
    latency::simulate_round_trip,
    ledger::{Amount, Ledger, TransactionDraft},
    navigation::app_page,
    transfer::{
        flow::{TransferForm, TransferStep, validate_lookup},
        view::step_view,
    },
};

/// The state needed to verify accounts and send transfers.
#[derive(Debug, Clone)]
pub struct TransferState {
    /// The ledger that sent transfers are recorded in.
    pub ledger: Arc<Mutex<Ledger>>,
    /// How long the mocked account lookup takes.
    pub lookup_latency: Duration,
    /// How long the mocked transfer takes.
    pub payment_latency: Duration,
}

impl FromRef<AppState> for TransferState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            lookup_latency: state.latency.account_lookup,
            payment_latency: state.latency.payment,
        }
    }
}

/// Display the transfer page.
pub async fn get_transfer_page(Extension(user): Extension<User>) -> Response {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div id=(FLOW_CONTAINER_ID) class="w-full max-w-lg"
            {
                (step_view(&TransferStep::start(), &user))
            }
        }
    };

    app_page(
        "Transfer",
        endpoints::TRANSFER_VIEW,
        &user,
        &[naira_input_styles()],
        &content,
    )
    .into_response()
}

/// Look up the owner of the account in the form and show their name on the details step.
pub async fn post_transfer_recipient(
    State(state): State<TransferState>,
    Extension(user): Extension<User>,
    Form(form): Form<TransferForm>,
) -> Response {
    let step = match validate_lookup(&form) {
        Ok(bank) => {
            simulate_round_trip("look up account", state.lookup_latency).await;
            TransferStep::verified(form, bank)
        }
        Err(errors) => TransferStep::lookup_failed(form, errors),
    };

    step_view(&step, &user).into_response()
}

/// Validate the transfer details and show the confirmation step, or the
/// details step with the validation messages.
pub async fn post_transfer_details(
    Extension(user): Extension<User>,
    Form(form): Form<TransferForm>,
) -> Response {
    step_view(&TransferStep::submit_details(form, user.balance), &user).into_response()
}

/// Go back from the confirmation step to the details step, keeping the values entered.
pub async fn post_transfer_edit(
    Extension(user): Extension<User>,
    Form(form): Form<TransferForm>,
) -> Response {
    step_view(&TransferStep::edit(form), &user).into_response()
}

/// Send the transfer and record it in the ledger as a debit to the recipient.
///
/// The details are validated again since they come back from the client.
pub async fn post_transfer_confirm(
    State(state): State<TransferState>,
    Extension(user): Extension<User>,
    Form(form): Form<TransferForm>,
) -> Response {
    let transfer = match TransferStep::submit_details(form, user.balance) {
        TransferStep::Confirm { transfer, .. } => transfer,
        step => return step_view(&step, &user).into_response(),
    };

    simulate_round_trip("send transfer", state.payment_latency).await;

    let amount = match Amount::new(transfer.amount) {
        Ok(amount) => amount,
        Err(error) => return error.into_alert_response(),
    };
    let draft =
        TransactionDraft::debit(amount, &transfer.description()).recipient(transfer.recipient);

    let transaction = match state.ledger.lock() {
        Ok(mut ledger) => ledger.add_transaction(draft),
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    tracing::info!(
        "User {} sent {} to {} at {}",
        user.id,
        transfer.amount,
        transfer.account_number,
        transfer.bank.name
    );
    tracing::debug!("Recorded transfer as transaction {}", transaction.id);

    step_view(&TransferStep::Success { transfer }, &user).into_response()
}
