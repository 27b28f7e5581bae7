//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    auth::{
        auth_guard, auth_guard_hx, get_log_in_page, get_log_out, get_register_page, post_log_in,
        register_user,
    },
    bill_payment::{
        get_bill_payment_page, post_bill_category, post_bill_confirm, post_bill_details,
        post_bill_edit, post_bill_form,
    },
    cards::{get_card, get_cards_page, post_creating_card, post_issue_card, post_toggle_card},
    dashboard::{get_dashboard_page, get_index_page},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    settings::{
        get_settings_page, post_notification_settings, post_profile_settings,
        post_security_settings,
    },
    transactions_page::get_transactions_page,
    transfer::{
        get_transfer_page, post_transfer_confirm, post_transfer_details, post_transfer_edit,
        post_transfer_recipient,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(endpoints::REGISTER_VIEW, get(get_register_page))
        .route(endpoints::USERS, post(register_user))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let protected_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::TRANSFER_VIEW, get(get_transfer_page))
        .route(endpoints::BILL_PAYMENT_VIEW, get(get_bill_payment_page))
        .route(endpoints::CARDS_VIEW, get(get_cards_page))
        .route(endpoints::SETTINGS_VIEW, get(get_settings_page))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    // These routes are requested by htmx, so auth redirects must use the HX-REDIRECT header.
    let protected_routes = protected_routes.merge(
        Router::new()
            .route(endpoints::TRANSFER_RECIPIENT, post(post_transfer_recipient))
            .route(endpoints::TRANSFER_DETAILS, post(post_transfer_details))
            .route(endpoints::TRANSFER_EDIT, post(post_transfer_edit))
            .route(endpoints::TRANSFER_CONFIRM, post(post_transfer_confirm))
            .route(endpoints::BILL_PAYMENT_CATEGORY, post(post_bill_category))
            .route(endpoints::BILL_PAYMENT_FORM, post(post_bill_form))
            .route(endpoints::BILL_PAYMENT_DETAILS, post(post_bill_details))
            .route(endpoints::BILL_PAYMENT_EDIT, post(post_bill_edit))
            .route(endpoints::BILL_PAYMENT_CONFIRM, post(post_bill_confirm))
            .route(endpoints::CARDS_CREATING, post(post_creating_card))
            .route(endpoints::CARDS_API, post(post_issue_card))
            .route(endpoints::CARD, get(get_card))
            .route(endpoints::CARD_TOGGLE, post(post_toggle_card))
            .route(endpoints::SETTINGS_PROFILE, post(post_profile_settings))
            .route(endpoints::SETTINGS_SECURITY, post(post_security_settings))
            .route(
                endpoints::SETTINGS_NOTIFICATIONS,
                post(post_notification_settings),
            )
            .layer(middleware::from_fn_with_state(state.clone(), auth_guard_hx)),
    );

    protected_routes
        .merge(unprotected_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
