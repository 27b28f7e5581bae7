//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/cards/{card_id}', use [format_endpoint].

use std::fmt::Display;

/// The root route which redirects to the dashboard or log in page.
pub const ROOT: &str = "/";
/// The landing page for logged in users.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page listing every transaction in the ledger.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for sending money to another account.
pub const TRANSFER_VIEW: &str = "/transfer";
/// The page for buying airtime, data and TV subscriptions.
pub const BILL_PAYMENT_VIEW: &str = "/bill-payment";
/// The page for viewing and creating cards.
pub const CARDS_VIEW: &str = "/cards";
/// The page for the user's profile, security and notification settings.
pub const SETTINGS_VIEW: &str = "/settings";
/// The route for getting the registration page.
pub const REGISTER_VIEW: &str = "/register";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to register a new user.
pub const USERS: &str = "/api/users";
/// The route to look up the name of the owner of a bank account.
pub const TRANSFER_RECIPIENT: &str = "/api/transfer/recipient";
/// The route to submit the transfer details and move to the confirmation step.
pub const TRANSFER_DETAILS: &str = "/api/transfer/details";
/// The route to go back from the confirmation step to the details step.
pub const TRANSFER_EDIT: &str = "/api/transfer/edit";
/// The route to confirm and send a transfer.
pub const TRANSFER_CONFIRM: &str = "/api/transfer/confirm";
/// The route to choose a bill category and move to the details step.
pub const BILL_PAYMENT_CATEGORY: &str = "/api/bill-payment/category";
/// The route to re-render the bill details step, e.g., after changing the provider.
pub const BILL_PAYMENT_FORM: &str = "/api/bill-payment/form";
/// The route to submit the bill details and move to the confirmation step.
pub const BILL_PAYMENT_DETAILS: &str = "/api/bill-payment/details";
/// The route to go back from the confirmation step to the details step.
pub const BILL_PAYMENT_EDIT: &str = "/api/bill-payment/edit";
/// The route to confirm and pay a bill.
pub const BILL_PAYMENT_CONFIRM: &str = "/api/bill-payment/confirm";
/// The route to start creating a virtual card.
pub const CARDS_CREATING: &str = "/api/cards/creating";
/// The route to issue a new virtual card.
pub const CARDS_API: &str = "/api/cards";
/// The route to get a single card.
pub const CARD: &str = "/api/cards/{card_id}";
/// The route to activate or deactivate a card.
pub const CARD_TOGGLE: &str = "/api/cards/{card_id}/toggle";
/// The route to save the profile settings.
pub const SETTINGS_PROFILE: &str = "/api/settings/profile";
/// The route to change the password.
pub const SETTINGS_SECURITY: &str = "/api/settings/security";
/// The route to save the notification preferences.
pub const SETTINGS_NOTIFICATIONS: &str = "/api/settings/notifications";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/cards/{card_id}', '{card_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSFER_VIEW);
        assert_endpoint_is_valid_uri(endpoints::BILL_PAYMENT_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CARDS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::SETTINGS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::REGISTER_VIEW);
        assert_endpoint_is_valid_uri(endpoints::LOG_IN_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::LOG_IN_API);
        assert_endpoint_is_valid_uri(endpoints::LOG_OUT);
        assert_endpoint_is_valid_uri(endpoints::USERS);
        assert_endpoint_is_valid_uri(endpoints::TRANSFER_RECIPIENT);
        assert_endpoint_is_valid_uri(endpoints::TRANSFER_DETAILS);
        assert_endpoint_is_valid_uri(endpoints::TRANSFER_EDIT);
        assert_endpoint_is_valid_uri(endpoints::TRANSFER_CONFIRM);
        assert_endpoint_is_valid_uri(endpoints::BILL_PAYMENT_CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::BILL_PAYMENT_FORM);
        assert_endpoint_is_valid_uri(endpoints::BILL_PAYMENT_DETAILS);
        assert_endpoint_is_valid_uri(endpoints::BILL_PAYMENT_EDIT);
        assert_endpoint_is_valid_uri(endpoints::BILL_PAYMENT_CONFIRM);
        assert_endpoint_is_valid_uri(endpoints::CARDS_CREATING);
        assert_endpoint_is_valid_uri(endpoints::CARDS_API);
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::CARD, 1));
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::CARD_TOGGLE, 1));
        assert_endpoint_is_valid_uri(endpoints::SETTINGS_PROFILE);
        assert_endpoint_is_valid_uri(endpoints::SETTINGS_SECURITY);
        assert_endpoint_is_valid_uri(endpoints::SETTINGS_NOTIFICATIONS);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());

        // Parameter with single word should also work.
        let formatted_path = format_endpoint("/hello/{world}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::CARD_TOGGLE, 7);

        assert_eq!(formatted_path, "/api/cards/7/toggle");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
