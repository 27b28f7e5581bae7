//! Checks shared by the form fields of the different pages.
//!
//! Validation failures are reported as inline messages next to the field and
//! never reach the stores.

use std::str::FromStr;

use email_address::EmailAddress;

/// The message shown when a required amount field is left empty.
pub const AMOUNT_REQUIRED: &str = "Amount is required";
/// The message shown when an amount field does not contain a number.
pub const AMOUNT_NOT_A_NUMBER: &str = "Amount must be a number";
/// The message shown when an amount is given in fractions of a kobo.
pub const AMOUNT_TOO_PRECISE: &str = "Amount can have at most two decimal places";

/// Whether `email` looks like an email address.
///
/// On top of the address syntax, the domain must end with a top level domain
/// of at least two letters, so "john@localhost" is rejected.
pub fn is_valid_email(email: &str) -> bool {
    let Ok(email) = EmailAddress::from_str(email) else {
        return false;
    };

    email
        .domain()
        .rsplit_once('.')
        .is_some_and(|(host, top_level_domain)| {
            !host.is_empty()
                && top_level_domain.len() >= 2
                && top_level_domain.chars().all(|c| c.is_ascii_alphabetic())
        })
}

/// Whether `text` is non-empty and made up only of ASCII digits.
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Whether `phone_number` is exactly eleven digits, e.g. "08012345678".
pub fn is_local_phone_number(phone_number: &str) -> bool {
    phone_number.len() == 11 && is_digits(phone_number)
}

/// Whether `phone_number` is made up of digits, plus signs and spaces.
pub fn is_phone_number(phone_number: &str) -> bool {
    !phone_number.trim().is_empty()
        && phone_number
            .chars()
            .all(|c| c.is_ascii_digit() || c == '+' || c == ' ')
}

/// Parse the raw text from an amount field.
///
/// # Errors
///
/// Returns the message to show next to the field if the text is empty, is
/// not a finite number or has more than two decimal places.
pub fn parse_amount(raw_amount: &str) -> Result<f64, &'static str> {
    let raw_amount = raw_amount.trim();

    if raw_amount.is_empty() {
        return Err(AMOUNT_REQUIRED);
    }

    let amount = match raw_amount.parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => return Err(AMOUNT_NOT_A_NUMBER),
    };

    let kobo = amount * 100.0;
    if (kobo - kobo.round()).abs() > 1e-6 {
        return Err(AMOUNT_TOO_PRECISE);
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::{
        AMOUNT_NOT_A_NUMBER, AMOUNT_REQUIRED, AMOUNT_TOO_PRECISE, is_digits, is_local_phone_number, is_phone_number,
        is_valid_email, parse_amount,
    };

    #[test]
    fn accepts_valid_emails() {
        for email in ["john@example.com", "JANE.DOE+bank@mail.example.ng"] {
            assert!(is_valid_email(email), "want {email} to be valid");
        }
    }

    #[test]
    fn rejects_invalid_emails() {
        for email in [
            "",
            "john",
            "john@",
            "@example.com",
            "john doe@example.com",
            "john@localhost",
            "john@example.c",
        ] {
            assert!(!is_valid_email(email), "want {email:?} to be invalid");
        }
    }

    #[test]
    fn digits_must_be_non_empty() {
        assert!(is_digits("0123456789"));
        assert!(!is_digits(""));
        assert!(!is_digits("12a4"));
    }

    #[test]
    fn local_phone_numbers_have_eleven_digits() {
        assert!(is_local_phone_number("08012345678"));
        assert!(!is_local_phone_number("0801234567"));
        assert!(!is_local_phone_number("080123456789"));
        assert!(!is_local_phone_number("+2348012345"));
    }

    #[test]
    fn phone_numbers_allow_plus_and_spaces() {
        assert!(is_phone_number("+234 801 234 5678"));
        assert!(!is_phone_number("   "));
        assert!(!is_phone_number("0801-234-5678"));
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(parse_amount(" 15000 "), Ok(15000.0));
        assert_eq!(parse_amount("99.5"), Ok(99.5));
        assert_eq!(parse_amount(""), Err(AMOUNT_REQUIRED));
        assert_eq!(parse_amount("lots"), Err(AMOUNT_NOT_A_NUMBER));
        assert_eq!(parse_amount("inf"), Err(AMOUNT_NOT_A_NUMBER));
    }

    #[test]
    fn amounts_stop_at_whole_kobo() {
        assert_eq!(parse_amount("100.01"), Ok(100.01));
        assert_eq!(parse_amount("0.1"), Ok(0.1));
        assert_eq!(parse_amount("100.009"), Err(AMOUNT_TOO_PRECISE));
        assert_eq!(parse_amount("0.004"), Err(AMOUNT_TOO_PRECISE));
        assert_eq!(parse_amount("4e-3"), Err(AMOUNT_TOO_PRECISE));
    }
}
