//! Route handlers for the cards page, revealing and freezing cards, and issuing virtual cards.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Extension,
    extract::{FromRef, Path, Query, State},
    response::{IntoResponse, Response},
};
use maud::html;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error, User,
    cards::view::{CardsStep, card_tile, step_view},
    endpoints,
    html::{FLOW_CONTAINER_ID, PAGE_CONTAINER_STYLE},
    latency::simulate_round_trip,
    ledger::{CardDraft, CardId, Ledger},
    navigation::app_page,
};

/// The state needed to show and issue cards.
#[derive(Debug, Clone)]
pub struct CardsState {
    /// The ledger holding the cards.
    pub ledger: Arc<Mutex<Ledger>>,
    /// How long the mocked card issuing call takes.
    pub latency: Duration,
}

impl FromRef<AppState> for CardsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            latency: state.latency.card_issue,
        }
    }
}

impl CardsState {
    /// Run `f` on the ledger while holding its lock.
    fn with_ledger<T>(&self, f: impl FnOnce(&mut Ledger) -> Result<T, Error>) -> Result<T, Error> {
        let mut ledger = self
            .ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::LedgerLockError)?;

        f(&mut ledger)
    }
}

/// Display the cards page with every card masked.
pub async fn get_cards_page(
    State(state): State<CardsState>,
    Extension(user): Extension<User>,
) -> Result<Response, Error> {
    let cards = state.with_ledger(|ledger| Ok(ledger.cards().to_vec()))?;

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div id=(FLOW_CONTAINER_ID) class="w-full max-w-3xl"
            {
                (step_view(&CardsStep::List(&cards)))
            }
        }
    };

    Ok(app_page("Cards", endpoints::CARDS_VIEW, &user, &[], &content).into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct CardQuery {
    /// Whether to show the card number, expiry date and CVV.
    #[serde(default)]
    pub reveal: bool,
}

/// Render a single card, showing or hiding its details.
pub async fn get_card(
    State(state): State<CardsState>,
    Path(card_id): Path<u64>,
    Query(query): Query<CardQuery>,
) -> Response {
    let card_id = CardId::new(card_id);

    match state.with_ledger(|ledger| ledger.card(card_id).cloned()) {
        Ok(card) => card_tile(&card, query.reveal).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Activate an inactive card or deactivate an active one.
pub async fn post_toggle_card(
    State(state): State<CardsState>,
    Path(card_id): Path<u64>,
) -> Response {
    let card_id = CardId::new(card_id);

    match state.with_ledger(|ledger| ledger.toggle_card_status(card_id)) {
        Ok(card) => card_tile(&card, false).into_response(),
        Err(error) => {
            tracing::warn!("Could not toggle card {card_id}: {error}");
            error.into_alert_response()
        }
    }
}

/// Show the step that waits for a new virtual card.
///
/// The step requests the card as soon as it loads.
pub async fn post_creating_card() -> Response {
    step_view(&CardsStep::Creating).into_response()
}

/// Issue a new virtual card and add it to the end of the card list.
pub async fn post_issue_card(State(state): State<CardsState>) -> Response {
    simulate_round_trip("issue card", state.latency).await;

    let today = OffsetDateTime::now_utc().date();
    let draft = CardDraft::new_virtual(&mut rand::thread_rng(), today);

    match state.with_ledger(|ledger| Ok(ledger.add_card(draft))) {
        Ok(_) => step_view(&CardsStep::Success).into_response(),
        Err(error) => error.into_alert_response(),
    }
}
