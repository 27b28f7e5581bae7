//! The steps of the transfer flow, the supported banks and the mocked account lookup.

use serde::Deserialize;

use crate::validation::{is_digits, parse_amount};

/// The smallest amount that can be transferred, in naira.
pub const MIN_TRANSFER_AMOUNT: f64 = 100.0;

/// The name every verified account resolves to.
const MOCK_RECIPIENT: &str = "Jane Doe";

/// A bank that money can be sent to.
#[derive(Debug, PartialEq)]
pub struct Bank {
    pub id: &'static str,
    pub name: &'static str,
}

pub const NIGERIAN_BANKS: [Bank; 6] = [
    Bank {
        id: "moopa",
        name: "Moopa Bank",
    },
    Bank {
        id: "zenith",
        name: "Zenith Bank",
    },
    Bank {
        id: "gtbank",
        name: "GTBank",
    },
    Bank {
        id: "firstbank",
        name: "First Bank",
    },
    Bank {
        id: "uba",
        name: "United Bank for Africa",
    },
    Bank {
        id: "access",
        name: "Access Bank",
    },
];

pub fn find_bank(id: &str) -> Option<&'static Bank> {
    NIGERIAN_BANKS.iter().find(|bank| bank.id == id)
}

/// Find the name of the owner of `account_number` at `bank`.
///
/// There is no real banking backend, so every account resolves to the same name.
pub fn lookup_recipient(_bank: &Bank, account_number: &str) -> Option<&'static str> {
    is_digits(account_number).then_some(MOCK_RECIPIENT)
}

/// The raw values of the transfer form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransferForm {
    pub bank: String,
    pub account_number: String,
    pub amount: String,
    pub narration: String,
    /// The name found by the last account lookup.
    pub recipient: String,
    /// The bank and account number that `recipient` was found for.
    ///
    /// Changing either field after verifying means the account must be verified again.
    pub verified_account: String,
}

impl TransferForm {
    fn account_key(&self) -> String {
        format!("{}/{}", self.bank, self.account_number.trim())
    }

    /// Whether the recipient was looked up for the bank and account number currently in the form.
    pub fn is_verified(&self) -> bool {
        !self.recipient.is_empty() && self.verified_account == self.account_key()
    }

    /// Record `recipient` as the owner of the account in the form.
    pub fn verify(&mut self, recipient: &str) {
        self.recipient = recipient.to_owned();
        self.verified_account = self.account_key();
    }

    fn clear_verification(&mut self) {
        self.recipient.clear();
        self.verified_account.clear();
    }
}

/// The validation messages for the transfer form.
#[derive(Debug, Default, PartialEq)]
pub struct TransferErrors {
    pub bank: Option<&'static str>,
    pub account_number: Option<&'static str>,
    pub amount: Option<&'static str>,
    pub recipient: Option<&'static str>,
}

/// A validated transfer, ready to be sent.
#[derive(Debug, PartialEq)]
pub struct Transfer {
    pub bank: &'static Bank,
    pub account_number: String,
    pub recipient: &'static str,
    /// The amount to send in naira.
    pub amount: f64,
    pub narration: Option<String>,
}

impl Transfer {
    /// The description of the transaction recorded for this transfer.
    pub fn description(&self) -> String {
        format!("Transfer to {}", self.recipient)
    }
}

fn validate_account(form: &TransferForm, errors: &mut TransferErrors) -> Option<&'static Bank> {
    let account_number = form.account_number.trim();

    errors.account_number = if account_number.is_empty() {
        Some("Account number is required")
    } else if !is_digits(account_number) {
        Some("Account number must contain only digits")
    } else {
        None
    };

    if form.bank.is_empty() {
        errors.bank = Some("Bank name is required");
        None
    } else {
        let bank = find_bank(&form.bank);
        if bank.is_none() {
            errors.bank = Some("Select a bank from the list");
        }
        bank
    }
}

/// Check the bank and account number before looking up the recipient.
///
/// # Errors
///
/// Returns the messages to show next to the bank and account number fields.
pub fn validate_lookup(form: &TransferForm) -> Result<&'static Bank, TransferErrors> {
    let mut errors = TransferErrors::default();
    let bank = validate_account(form, &mut errors);

    match bank {
        Some(bank) if errors == TransferErrors::default() => Ok(bank),
        _ => Err(errors),
    }
}

/// Check the submitted transfer against the sender's `balance`.
///
/// # Errors
///
/// Returns the messages to show next to each invalid field.
pub fn validate(form: &TransferForm, balance: f64) -> Result<Transfer, TransferErrors> {
    let mut errors = TransferErrors::default();
    let bank = validate_account(form, &mut errors);

    let amount = match parse_amount(&form.amount) {
        Ok(amount) if amount < MIN_TRANSFER_AMOUNT => {
            errors.amount = Some("Minimum transfer amount is ₦100");
            None
        }
        Ok(amount) if amount > balance => {
            errors.amount = Some("Amount exceeds your balance");
            None
        }
        Ok(amount) => Some(amount),
        Err(message) => {
            errors.amount = Some(message);
            None
        }
    };

    let account_number = form.account_number.trim();
    let recipient = match bank {
        Some(bank) if errors.account_number.is_none() && form.is_verified() => {
            lookup_recipient(bank, account_number)
        }
        Some(_) if errors.account_number.is_none() => {
            errors.recipient = Some("Verify the account number to continue");
            None
        }
        _ => None,
    };

    match (bank, recipient, amount) {
        (Some(bank), Some(recipient), Some(amount)) if errors == TransferErrors::default() => {
            let narration = form.narration.trim();

            Ok(Transfer {
                bank,
                account_number: account_number.to_owned(),
                recipient,
                amount,
                narration: (!narration.is_empty()).then(|| narration.to_owned()),
            })
        }
        _ => Err(errors),
    }
}

/// A step of the transfer flow.
#[derive(Debug, PartialEq)]
pub enum TransferStep {
    /// Fill in and verify the recipient's account and the amount.
    Details {
        form: TransferForm,
        errors: TransferErrors,
    },
    /// Review the transfer before sending it.
    Confirm {
        form: TransferForm,
        transfer: Transfer,
    },
    /// The money has been sent.
    Success { transfer: Transfer },
}

impl TransferStep {
    /// An empty details step.
    pub fn start() -> Self {
        TransferStep::Details {
            form: TransferForm::default(),
            errors: TransferErrors::default(),
        }
    }

    /// Show the details step again with the values in `form` and no errors.
    pub fn edit(mut form: TransferForm) -> Self {
        if !form.is_verified() {
            form.clear_verification();
        }

        TransferStep::Details {
            form,
            errors: TransferErrors::default(),
        }
    }

    /// The details step after looking up the recipient of the account in `form`.
    pub fn verified(mut form: TransferForm, bank: &Bank) -> Self {
        match lookup_recipient(bank, form.account_number.trim()) {
            Some(recipient) => form.verify(recipient),
            None => form.clear_verification(),
        }

        Self::edit(form)
    }

    /// The details step with the messages explaining why the account could not be looked up.
    pub fn lookup_failed(mut form: TransferForm, errors: TransferErrors) -> Self {
        form.clear_verification();

        TransferStep::Details { form, errors }
    }

    /// Move to the confirmation step if the details in `form` are valid.
    pub fn submit_details(form: TransferForm, balance: f64) -> Self {
        match validate(&form, balance) {
            Ok(transfer) => TransferStep::Confirm { form, transfer },
            Err(errors) => TransferStep::Details { form, errors },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        TransferErrors, TransferForm, TransferStep, find_bank, validate, validate_lookup,
    };

    const BALANCE: f64 = 250_000.0;

    fn verified_form(amount: &str) -> TransferForm {
        let mut form = TransferForm {
            bank: "zenith".to_owned(),
            account_number: "0123456789".to_owned(),
            amount: amount.to_owned(),
            ..Default::default()
        };
        form.verify("Jane Doe");
        form
    }

    #[test]
    fn valid_transfer_goes_to_recipient() {
        let transfer = validate(&verified_form("15000"), BALANCE).unwrap();

        assert_eq!(transfer.recipient, "Jane Doe");
        assert_eq!(transfer.bank.name, "Zenith Bank");
        assert_eq!(transfer.amount, 15_000.0);
        assert_eq!(transfer.narration, None);
        assert_eq!(transfer.description(), "Transfer to Jane Doe");
    }

    #[test]
    fn amount_must_be_between_minimum_and_balance() {
        let cases = [
            ("", "Amount is required"),
            ("lots", "Amount must be a number"),
            ("100.009", "Amount can have at most two decimal places"),
            ("99.99", "Minimum transfer amount is ₦100"),
            ("250000.01", "Amount exceeds your balance"),
        ];

        for (amount, want) in cases {
            let errors = validate(&verified_form(amount), BALANCE).unwrap_err();

            assert_eq!(errors.amount, Some(want), "amount {amount:?}");
        }

        assert!(validate(&verified_form("100"), BALANCE).is_ok());
        assert!(validate(&verified_form("250000"), BALANCE).is_ok());
    }

    #[test]
    fn account_must_be_verified() {
        let form = TransferForm {
            bank: "gtbank".to_owned(),
            account_number: "0123456789".to_owned(),
            amount: "500".to_owned(),
            ..Default::default()
        };

        let errors = validate(&form, BALANCE).unwrap_err();

        assert_eq!(
            errors,
            TransferErrors {
                recipient: Some("Verify the account number to continue"),
                ..Default::default()
            }
        );
    }

    #[test]
    fn changing_account_number_needs_new_verification() {
        let mut form = verified_form("500");
        form.account_number = "9876543210".to_owned();

        assert!(!form.is_verified());
        assert!(validate(&form, BALANCE).unwrap_err().recipient.is_some());
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let errors = validate(&TransferForm::default(), BALANCE).unwrap_err();

        assert_eq!(
            errors,
            TransferErrors {
                bank: Some("Bank name is required"),
                account_number: Some("Account number is required"),
                amount: Some("Amount is required"),
                recipient: None,
            }
        );
    }

    #[test]
    fn lookup_needs_digits_only_account_at_known_bank() {
        let form = TransferForm {
            bank: "monzo".to_owned(),
            account_number: "01234x".to_owned(),
            ..Default::default()
        };

        let errors = validate_lookup(&form).unwrap_err();

        assert_eq!(errors.bank, Some("Select a bank from the list"));
        assert_eq!(
            errors.account_number,
            Some("Account number must contain only digits")
        );
    }

    #[test]
    fn verified_step_keeps_other_values() {
        let form = TransferForm {
            bank: "uba".to_owned(),
            account_number: "0123456789".to_owned(),
            amount: "1200".to_owned(),
            narration: "Rent".to_owned(),
            ..Default::default()
        };
        let bank = find_bank("uba").unwrap();

        let TransferStep::Details { form, errors } = TransferStep::verified(form, bank) else {
            panic!("want details step");
        };

        assert!(form.is_verified());
        assert_eq!(form.recipient, "Jane Doe");
        assert_eq!(form.amount, "1200");
        assert_eq!(form.narration, "Rent");
        assert_eq!(errors, TransferErrors::default());
    }

    #[test]
    fn narration_is_trimmed_and_optional() {
        let mut form = verified_form("500");
        form.narration = "  School fees ".to_owned();

        let transfer = validate(&form, BALANCE).unwrap();

        assert_eq!(transfer.narration.as_deref(), Some("School fees"));
    }
}
