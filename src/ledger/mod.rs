//! The in-memory ledger of transactions and cards for the session.
//!
//! The ledger is not persisted: it starts with a few demo records every time
//! the server starts and only grows from there.

mod card;
mod store;
mod transaction;

pub use card::{Card, CardDraft, CardId, CardType};
pub use store::Ledger;
pub use transaction::{
    Amount, Transaction, TransactionDraft, TransactionId, TransactionStatus, TransactionType,
};
