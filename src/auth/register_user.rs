//! The registration page for opening a new account.

use std::time::Duration;

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    auth::INVALID_EMAIL_MSG,
    endpoints,
    html::{InputField, LINK_STYLE, base, field_error, link, log_in_register, submit_button},
    session::{CookieStorage, SessionStore},
    validation::{is_phone_number, is_valid_email},
};

/// The minimum number of characters for a new password.
const PASSWORD_MIN_LENGTH: usize = 8;

/// The message shown above the form when registration fails.
const REGISTRATION_FAILED_MSG: &str = "Registration failed. Please try again.";

#[derive(Default)]
struct RegisterErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    phone: Option<&'static str>,
    password: Option<&'static str>,
    confirm_password: Option<&'static str>,
    terms: Option<&'static str>,
    form: Option<&'static str>,
}

impl RegisterErrors {
    fn validate(form: &RegisterForm) -> Self {
        let email = form.email.trim();

        Self {
            name: form
                .name
                .trim()
                .is_empty()
                .then_some("Full name is required"),
            email: if email.is_empty() {
                Some("Email is required")
            } else if !is_valid_email(email) {
                Some(INVALID_EMAIL_MSG)
            } else {
                None
            },
            phone: if form.phone.trim().is_empty() {
                Some("Phone number is required")
            } else if !is_phone_number(&form.phone) {
                Some("Invalid phone number")
            } else {
                None
            },
            password: if form.password.is_empty() {
                Some("Password is required")
            } else if form.password.chars().count() < PASSWORD_MIN_LENGTH {
                Some("Password must be at least 8 characters")
            } else {
                None
            },
            confirm_password: if form.confirm_password.is_empty() {
                Some("Please confirm your password")
            } else if form.confirm_password != form.password {
                Some("Passwords do not match")
            } else {
                None
            },
            terms: form
                .terms
                .is_none()
                .then_some("You must accept the terms to continue"),
            form: None,
        }
    }

    fn is_empty(&self) -> bool {
        [
            self.name,
            self.email,
            self.phone,
            self.password,
            self.confirm_password,
            self.terms,
            self.form,
        ]
        .iter()
        .all(Option::is_none)
    }
}

fn registration_form(form: &RegisterForm, errors: &RegisterErrors) -> Markup {
    html! {
        form
            hx-post=(endpoints::USERS)
            hx-indicator="#indicator"
            hx-disabled-elt="#submit-button"
            class="space-y-4 md:space-y-6"
        {
            @if let Some(error) = errors.form {
                div class="bg-red-50 border-l-4 border-red-500 p-4 text-sm text-red-700" role="alert"
                {
                    (error)
                }
            }

            (InputField::new("name", "Full Name")
                .value(&form.name)
                .placeholder("John Doe")
                .error(errors.name)
                .into_html())

            (InputField::new("email", "Email Address")
                .type_("email")
                .value(&form.email)
                .placeholder("you@example.com")
                .error(errors.email)
                .into_html())

            (InputField::new("phone", "Phone Number")
                .type_("tel")
                .value(&form.phone)
                .placeholder("+234 801 234 5678")
                .error(errors.phone)
                .into_html())

            (InputField::new("password", "Password")
                .type_("password")
                .error(errors.password)
                .into_html())

            (InputField::new("confirm_password", "Confirm Password")
                .type_("password")
                .error(errors.confirm_password)
                .into_html())

            div
            {
                div class="flex items-center gap-x-3"
                {
                    input
                        type="checkbox"
                        name="terms"
                        id="terms"
                        required
                        checked[form.terms.is_some()]
                        class="rounded-xs";

                    label for="terms" class="block text-sm text-gray-900 dark:text-white"
                    {
                        "I agree to the "
                        a href="#" class=(LINK_STYLE) { "Terms of Service" }
                        " and "
                        a href="#" class=(LINK_STYLE) { "Privacy Policy" }
                    }
                }

                (field_error(errors.terms))
            }

            (submit_button("Create Account"))

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "Already have an account? "
                (link(endpoints::LOG_IN_VIEW, "Sign in"))
            }
        }
    }
}

/// Display the registration page.
pub async fn get_register_page() -> Response {
    let form = registration_form(&RegisterForm::default(), &RegisterErrors::default());
    let content = log_in_register("Create your account", "Join Moopa Bank today", &form);

    base("Register", &[], &content).into_response()
}

/// The state needed for creating a new user.
#[derive(Debug, Clone)]
pub struct RegistrationState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// How long the mocked registration call takes.
    pub latency: Duration,
}

impl FromRef<AppState> for RegistrationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            latency: state.latency.auth,
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<RegistrationState> for Key {
    fn from_ref(state: &RegistrationState) -> Self {
        state.cookie_key.clone()
    }
}

/// The raw data entered by the user in the registration form.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    /// Set to any value when the terms checkbox is ticked.
    pub terms: Option<String>,
}

/// Handler for registration requests via the POST method.
///
/// On success the session cookie is set and the client is redirected to the dashboard.
pub async fn register_user(
    State(state): State<RegistrationState>,
    jar: PrivateCookieJar,
    Form(form): Form<RegisterForm>,
) -> Response {
    let errors = RegisterErrors::validate(&form);

    if !errors.is_empty() {
        return registration_form(&form, &errors).into_response();
    }

    let mut session = SessionStore::load(CookieStorage::new(jar), state.latency);

    match session
        .register(form.name.trim(), form.email.trim(), &form.password)
        .await
    {
        Ok(_) => (
            StatusCode::SEE_OTHER,
            HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
            session.into_storage().into_jar(),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not register user: {error}");
            let errors = RegisterErrors {
                form: Some(REGISTRATION_FAILED_MSG),
                ..Default::default()
            };

            registration_form(&form, &errors).into_response()
        }
    }
}
