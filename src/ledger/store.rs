use std::collections::VecDeque;

use time::{OffsetDateTime, macros::datetime};

use crate::{
    Error,
    ledger::{
        Amount, Card, CardDraft, CardId, CardType, Transaction, TransactionDraft, TransactionId,
    },
};

/// The transactions and cards of the signed in user.
///
/// Transactions are kept newest first and cards in the order they were
/// issued. IDs are never reused.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: VecDeque<Transaction>,
    cards: Vec<Card>,
    next_transaction_id: u64,
    next_card_id: u64,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: VecDeque::new(),
            cards: Vec::new(),
            next_transaction_id: 1,
            next_card_id: 1,
        }
    }

    /// Create a ledger with a salary payment, an airtime purchase, a transfer
    /// and one active virtual card so the demo has something to show.
    pub fn with_demo_data() -> Result<Self, Error> {
        let mut ledger = Self::new();

        ledger.insert_transaction(
            TransactionDraft::credit(Amount::new(50_000.0)?, "Salary Payment"),
            datetime!(2024-10-01 00:00 UTC),
        );
        ledger.insert_transaction(
            TransactionDraft::debit(Amount::new(2_500.0)?, "Airtime Purchase"),
            datetime!(2024-10-02 00:00 UTC),
        );
        ledger.insert_transaction(
            TransactionDraft::debit(Amount::new(15_000.0)?, "Transfer to Jane")
                .recipient("Jane Smith"),
            datetime!(2024-10-03 00:00 UTC),
        );

        ledger.add_card(CardDraft {
            type_: CardType::Virtual,
            card_number: "4123 **** **** 5678".to_owned(),
            expiry_date: "12/26".to_owned(),
            cvv: "***".to_owned(),
            is_active: true,
        });

        Ok(ledger)
    }

    /// Record a new transaction at the current time.
    ///
    /// The transaction is placed at the start of the list and a copy of it is
    /// returned with its assigned ID.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Transaction {
        self.insert_transaction(draft, OffsetDateTime::now_utc())
    }

    fn insert_transaction(
        &mut self,
        draft: TransactionDraft,
        created_at: OffsetDateTime,
    ) -> Transaction {
        let transaction = Transaction {
            id: TransactionId::new(self.next_transaction_id),
            type_: draft.type_,
            amount: draft.amount,
            description: draft.description,
            recipient: draft.recipient,
            created_at,
            status: draft.status,
        };

        self.next_transaction_id += 1;
        self.transactions.push_front(transaction.clone());

        tracing::info!(
            "Recorded transaction {} \"{}\"",
            transaction.id,
            transaction.description
        );

        transaction
    }

    /// Issue a new card and add it to the end of the card list.
    pub fn add_card(&mut self, draft: CardDraft) -> Card {
        let card = Card {
            id: CardId::new(self.next_card_id),
            type_: draft.type_,
            card_number: draft.card_number,
            expiry_date: draft.expiry_date,
            cvv: draft.cvv,
            is_active: draft.is_active,
        };

        self.next_card_id += 1;
        self.cards.push(card.clone());

        tracing::info!("Issued card {}", card.id);

        card
    }

    /// Freeze an active card or unfreeze a frozen one.
    ///
    /// # Errors
    ///
    /// Returns [Error::CardNotFound] if there is no card with `id`, in which
    /// case nothing changes.
    pub fn toggle_card_status(&mut self, id: CardId) -> Result<Card, Error> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or(Error::CardNotFound(id))?;

        card.is_active = !card.is_active;

        tracing::info!(
            "Card {} is now {}",
            card.id,
            if card.is_active { "active" } else { "frozen" }
        );

        Ok(card.clone())
    }

    /// All transactions, newest first.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// The `count` most recent transactions, newest first.
    pub fn recent_transactions(&self, count: usize) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().take(count)
    }

    /// All cards in the order they were issued.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get the card with `id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::CardNotFound] if there is no card with `id`.
    pub fn card(&self, id: CardId) -> Result<&Card, Error> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .ok_or(Error::CardNotFound(id))
    }
}
