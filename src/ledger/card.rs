//! Defines the card model and how new virtual cards are generated.

use std::fmt::Display;

use rand::Rng;
use time::Date;

/// A newtype wrapper for card IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardId(u64);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether a card only exists online or has been printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardType {
    Virtual,
    #[allow(dead_code)]
    Physical,
}

impl CardType {
    /// The label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            CardType::Virtual => "Virtual Card",
            CardType::Physical => "Physical Card",
        }
    }
}

/// A debit card linked to the account.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub type_: CardType,
    /// The card number with the middle digits masked, e.g. "5399 1234 **** 5678".
    pub card_number: String,
    /// The month and two-digit year the card expires, e.g. "12/29".
    pub expiry_date: String,
    pub cvv: String,
    /// Inactive cards are kept but cannot be used for payments.
    pub is_active: bool,
}

/// Everything needed to add a card to the ledger except the ID.
#[derive(Clone, Debug, PartialEq)]
pub struct CardDraft {
    pub type_: CardType,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub is_active: bool,
}

/// How many years a new virtual card is valid for.
const CARD_VALIDITY_YEARS: i32 = 4;

impl CardDraft {
    /// Generate an active virtual card with a random number and CVV that
    /// expires in December four years after `today`.
    pub fn new_virtual(rng: &mut impl Rng, today: Date) -> Self {
        let card_number = format!(
            "5399 {} **** {}",
            rng.gen_range(1000..10000),
            rng.gen_range(1000..10000)
        );
        let expiry_year = (today.year() + CARD_VALIDITY_YEARS) % 100;

        Self {
            type_: CardType::Virtual,
            card_number,
            expiry_date: format!("12/{expiry_year:02}"),
            cvv: rng.gen_range(100..1000).to_string(),
            is_active: true,
        }
    }
}
