//! Route handlers for the settings page and for saving each tab.

use std::time::Duration;

use axum::{
    Extension, Form,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, User,
    alert::Alert,
    endpoints,
    latency::simulate_round_trip,
    navigation::app_page,
    settings::view::{
        NotificationPreferences, ProfileErrors, ProfileForm, SecurityErrors, SecurityForm,
        SettingsTab, notifications_panel, profile_panel, security_panel, settings_layout,
    },
    validation::is_valid_email,
};

/// The shortest password that can be set.
const MIN_PASSWORD_LENGTH: usize = 8;

/// The state needed to save the settings.
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// How long the mocked save call takes.
    pub latency: Duration,
}

impl FromRef<AppState> for SettingsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            latency: state.latency.settings_save,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SettingsQuery {
    /// The tab to show, the profile tab if missing or unknown.
    pub tab: Option<String>,
    /// Whether to open the profile tab for editing.
    #[serde(default)]
    pub edit: bool,
}

/// Display the settings page on the tab named in the query.
pub async fn get_settings_page(
    Query(query): Query<SettingsQuery>,
    Extension(user): Extension<User>,
) -> Response {
    let tab = query
        .tab
        .as_deref()
        .and_then(SettingsTab::parse)
        .unwrap_or_default();

    let panel = match tab {
        SettingsTab::Profile => {
            let profile = ProfileForm {
                name: user.name.clone(),
                email: user.email.clone(),
                ..Default::default()
            };
            profile_panel(&profile, &ProfileErrors::default(), query.edit)
        }
        SettingsTab::Security => security_panel(&SecurityErrors::default()),
        SettingsTab::Notifications => notifications_panel(NotificationPreferences::default()),
    };

    app_page(
        "Settings",
        endpoints::SETTINGS_VIEW,
        &user,
        &[],
        &settings_layout(tab, &panel),
    )
    .into_response()
}

fn saved(panel: Markup, details: &str) -> Response {
    let alert = Alert::Success {
        message: "Settings updated successfully".to_owned(),
        details: details.to_owned(),
    };

    html! {
        (panel)
        (alert.into_oob_html())
    }
    .into_response()
}

/// Save the profile and show it read-only with the submitted values.
///
/// The signed in user keeps their original name and email.
pub async fn post_profile_settings(
    State(state): State<SettingsState>,
    Form(mut profile): Form<ProfileForm>,
) -> Response {
    profile.name = profile.name.trim().to_owned();
    profile.email = profile.email.trim().to_owned();

    let errors = ProfileErrors {
        name: profile.name.is_empty().then_some("Full name is required"),
        email: if profile.email.is_empty() {
            Some("Email is required")
        } else if !is_valid_email(&profile.email) {
            Some("Invalid email address")
        } else {
            None
        },
    };

    if errors != ProfileErrors::default() {
        return profile_panel(&profile, &errors, true).into_response();
    }

    simulate_round_trip("save profile", state.latency).await;
    tracing::info!("Saved profile settings");

    saved(
        profile_panel(&profile, &ProfileErrors::default(), false),
        "Your profile has been updated.",
    )
}

fn validate_security(form: &SecurityForm) -> SecurityErrors {
    SecurityErrors {
        current_password: form
            .current_password
            .is_empty()
            .then_some("Current password is required"),
        new_password: if form.new_password.is_empty() {
            Some("New password is required")
        } else if form.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            Some("Password must be at least 8 characters")
        } else {
            None
        },
        confirm_password: if form.confirm_password.is_empty() {
            Some("Please confirm your password")
        } else if form.confirm_password != form.new_password {
            Some("Passwords do not match")
        } else {
            None
        },
    }
}

/// Change the password and clear the security form.
pub async fn post_security_settings(
    State(state): State<SettingsState>,
    Form(form): Form<SecurityForm>,
) -> Response {
    let errors = validate_security(&form);

    if errors != SecurityErrors::default() {
        return security_panel(&errors).into_response();
    }

    simulate_round_trip("change password", state.latency).await;
    tracing::info!("Changed password");

    saved(
        security_panel(&SecurityErrors::default()),
        "Your password has been changed.",
    )
}

/// The notification checkboxes. Unchecked boxes are left out of the form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NotificationsForm {
    pub email_notifications: Option<String>,
    pub push_notifications: Option<String>,
    pub sms_notifications: Option<String>,
}

/// Save which notification channels are switched on.
pub async fn post_notification_settings(
    State(state): State<SettingsState>,
    Form(form): Form<NotificationsForm>,
) -> Response {
    let preferences = NotificationPreferences {
        email: form.email_notifications.is_some(),
        push: form.push_notifications.is_some(),
        sms: form.sms_notifications.is_some(),
    };

    simulate_round_trip("save notification preferences", state.latency).await;
    tracing::info!("Saved notification preferences {preferences:?}");

    saved(
        notifications_panel(preferences),
        "Your notification preferences have been saved.",
    )
}
