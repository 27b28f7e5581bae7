//! Defines the transaction model and the draft used to record new transactions.

use std::fmt::Display;

use time::OffsetDateTime;

use crate::Error;

/// A newtype wrapper for transaction IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Create a new transaction ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A finite, non-negative amount of money in naira.
///
/// Whether the money came in or went out is given by [TransactionType], so
/// the amount itself is never negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Create a new amount.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `amount` is negative, infinite or NaN.
    pub fn new(amount: f64) -> Result<Self, Error> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(Self(amount))
        } else {
            Err(Error::InvalidAmount(amount))
        }
    }

    /// The amount in naira.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

/// Whether money came into (credit) or went out of (debit) the account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionType {
    Credit,
    Debit,
}

/// How far along a transaction is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    #[allow(dead_code)]
    Pending,
    #[allow(dead_code)]
    Failed,
}

impl TransactionStatus {
    /// The label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

/// A movement of money recorded in the ledger.
///
/// Transactions are created by [crate::Ledger::add_transaction] and are never
/// changed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub type_: TransactionType,
    pub amount: Amount,
    pub description: String,
    /// The name of the person who received the money, if any.
    pub recipient: Option<String>,
    pub created_at: OffsetDateTime,
    pub status: TransactionStatus,
}

/// Everything needed to record a transaction except the ID and timestamp,
/// which are assigned by the ledger.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub type_: TransactionType,
    pub amount: Amount,
    pub description: String,
    pub recipient: Option<String>,
    pub status: TransactionStatus,
}

impl TransactionDraft {
    /// A completed payment out of the account.
    pub fn debit(amount: Amount, description: &str) -> Self {
        Self {
            type_: TransactionType::Debit,
            amount,
            description: description.to_owned(),
            recipient: None,
            status: TransactionStatus::Completed,
        }
    }

    /// A completed payment into the account.
    pub fn credit(amount: Amount, description: &str) -> Self {
        Self {
            type_: TransactionType::Credit,
            ..Self::debit(amount, description)
        }
    }

    /// Set the name of the person receiving the money.
    pub fn recipient(mut self, recipient: &str) -> Self {
        self.recipient = Some(recipient.to_owned());
        self
    }

    #[cfg(test)]
    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{Amount, TransactionDraft, TransactionStatus, TransactionType};

    #[test]
    fn amount_rejects_negative_and_non_finite_values() {
        assert_eq!(Amount::new(-0.01), Err(Error::InvalidAmount(-0.01)));
        assert!(Amount::new(f64::INFINITY).is_err());
        assert!(Amount::new(f64::NAN).is_err());
    }

    #[test]
    fn amount_accepts_zero() {
        assert_eq!(Amount::new(0.0).map(|amount| amount.as_f64()), Ok(0.0));
    }

    #[test]
    fn credit_draft_keeps_fields() {
        let amount = Amount::new(50_000.0).unwrap();

        let draft = TransactionDraft::credit(amount, "Salary Payment");

        assert_eq!(draft.type_, TransactionType::Credit);
        assert_eq!(draft.amount, amount);
        assert_eq!(draft.description, "Salary Payment");
        assert_eq!(draft.recipient, None);
        assert_eq!(draft.status, TransactionStatus::Completed);
    }
}
