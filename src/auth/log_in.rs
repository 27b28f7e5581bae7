//! This file defines the routes for displaying the log-in page and handling log-in requests.

use std::time::Duration;

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    auth::{INVALID_EMAIL_MSG, normalize_redirect_url},
    endpoints,
    html::{InputField, base, link, log_in_register, submit_button},
    session::{CookieStorage, SessionStore},
    validation::is_valid_email,
};

/// The message shown above the form when logging in fails.
pub const INVALID_CREDENTIALS_ERROR_MSG: &str = "Invalid credentials";

#[derive(Default)]
struct LogInErrors<'a> {
    email: Option<&'a str>,
    password: Option<&'a str>,
    form: Option<&'a str>,
}

fn log_in_form(email: &str, errors: &LogInErrors, redirect_url: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::LOG_IN_API)
            hx-indicator="#indicator"
            hx-disabled-elt="#email, #password, #submit-button"
            class="space-y-4 md:space-y-6"
        {
            @if let Some(redirect_url) = redirect_url {
                input type="hidden" name="redirect_url" value=(redirect_url);
            }

            @if let Some(error) = errors.form {
                div class="bg-red-50 border-l-4 border-red-500 p-4 text-sm text-red-700" role="alert"
                {
                    (error)
                }
            }

            (InputField::new("email", "Email Address")
                .type_("email")
                .value(email)
                .placeholder("you@example.com")
                .error(errors.email)
                .into_html())

            (InputField::new("password", "Password")
                .type_("password")
                .error(errors.password)
                .into_html())

            (submit_button("Log in"))

            p class="text-sm font-light text-gray-500 dark:text-gray-400" {
                "Don't have an account? "
                (link(endpoints::REGISTER_VIEW, "Register here"))
            }
        }
    }
}

fn parse_redirect_url(raw_url: Option<&str>, source: &str) -> Option<String> {
    let redirect_url = raw_url.and_then(normalize_redirect_url);

    if let (None, Some(raw_url)) = (&redirect_url, raw_url) {
        tracing::warn!("Invalid redirect URL from {source}: {raw_url}");
    }

    redirect_url
}

/// Display the log-in page.
pub async fn get_log_in_page(Query(query): Query<RedirectQuery>) -> Response {
    let redirect_url = parse_redirect_url(query.redirect_url.as_deref(), "log-in query");
    let form = log_in_form("", &LogInErrors::default(), redirect_url.as_deref());
    let content = log_in_register(
        "Welcome back",
        "Nigeria's Smart Banking Platform for Everyone",
        &form,
    );

    base("Log In", &[], &content).into_response()
}

/// The state needed to perform a login.
#[derive(Debug, Clone)]
pub struct LogInState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// How long the mocked log-in call takes.
    pub latency: Duration,
}

impl FromRef<AppState> for LogInState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            latency: state.latency.auth,
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<LogInState> for Key {
    fn from_ref(state: &LogInState) -> Self {
        state.cookie_key.clone()
    }
}

/// Handler for log-in requests via the POST method.
///
/// On a successful log-in request, the session cookie is set and the client is redirected to the
/// dashboard page, or the page they were trying to reach.
/// Otherwise, the form is returned with an error message explaining the problem.
pub async fn post_log_in(
    State(state): State<LogInState>,
    jar: PrivateCookieJar,
    Form(user_data): Form<LogInData>,
) -> Response {
    let redirect_url = parse_redirect_url(user_data.redirect_url.as_deref(), "log-in form");
    let redirect_url = redirect_url.as_deref();
    let email = user_data.email.trim();

    let errors = LogInErrors {
        email: if email.is_empty() {
            Some("Email is required")
        } else if !is_valid_email(email) {
            Some(INVALID_EMAIL_MSG)
        } else {
            None
        },
        password: user_data
            .password
            .is_empty()
            .then_some("Password is required"),
        form: None,
    };

    if errors.email.is_some() || errors.password.is_some() {
        return log_in_form(email, &errors, redirect_url).into_response();
    }

    let mut session = SessionStore::load(CookieStorage::new(jar), state.latency);

    match session.log_in(email, &user_data.password).await {
        Ok(_) => (
            StatusCode::SEE_OTHER,
            HxRedirect(redirect_url.unwrap_or(endpoints::DASHBOARD_VIEW).to_owned()),
            session.into_storage().into_jar(),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not log in: {error}");
            let errors = LogInErrors {
                form: Some(INVALID_CREDENTIALS_ERROR_MSG),
                ..Default::default()
            };

            log_in_form(email, &errors, redirect_url).into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct RedirectQuery {
    pub redirect_url: Option<String>,
}

/// The raw data entered by the user in the log-in form.
///
/// There is no real backend, so any well formed email and non-empty password is accepted.
#[derive(Clone, Deserialize)]
pub struct LogInData {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    /// Optional URL to redirect to after logging in.
    /// Only accepted from the log-in form submission.
    pub redirect_url: Option<String>,
}

#[cfg(test)]
mod log_in_page_tests {
    use axum::{extract::Query, http::StatusCode};

    use crate::{
        endpoints,
        test_utils::{
            assert_form_input, assert_form_submit_button, assert_hx_endpoint, assert_valid_html,
            must_get_form, parse_html_document,
        },
    };

    use super::{RedirectQuery, get_log_in_page};

    #[tokio::test]
    async fn log_in_page_displays_form() {
        let response = get_log_in_page(Query(RedirectQuery { redirect_url: None })).await;

        assert_eq!(response.status(), StatusCode::OK);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_hx_endpoint(&form, endpoints::LOG_IN_API, "hx-post");
        assert_form_input(&form, "email", "email");
        assert_form_input(&form, "password", "password");
        assert_form_submit_button(&form);

        let register_link = form
            .select(&scraper::Selector::parse("a[href]").unwrap())
            .next()
            .expect("want link to register page");
        assert_eq!(
            register_link.value().attr("href"),
            Some(endpoints::REGISTER_VIEW)
        );
    }

    #[tokio::test]
    async fn log_in_page_preserves_redirect_url() {
        let redirect_url = "/bill-payment?category=data".to_owned();
        let response = get_log_in_page(Query(RedirectQuery {
            redirect_url: Some(redirect_url.clone()),
        }))
        .await;

        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let input_selector = scraper::Selector::parse("input[name=redirect_url]").unwrap();
        let input = document
            .select(&input_selector)
            .next()
            .expect("want redirect_url input");
        assert_eq!(input.value().attr("value"), Some(redirect_url.as_str()));
    }

    #[tokio::test]
    async fn log_in_page_drops_external_redirect_url() {
        let response = get_log_in_page(Query(RedirectQuery {
            redirect_url: Some("https://example.com".to_owned()),
        }))
        .await;

        let document = parse_html_document(response).await;
        let input_selector = scraper::Selector::parse("input[name=redirect_url]").unwrap();
        assert_eq!(document.select(&input_selector).count(), 0);
    }
}

#[cfg(test)]
mod log_in_tests {
    use std::time::Duration;

    use axum::{
        Router,
        body::Body,
        extract::State,
        http::{Response, StatusCode},
        routing::post,
    };
    use axum_extra::extract::{Form, PrivateCookieJar};
    use axum_test::TestServer;

    use crate::{
        app_state::create_cookie_key,
        endpoints,
        session::SESSION_KEY,
        test_utils::{
            assert_form_error_message, assert_hx_redirect, decrypt_session_user,
            parse_html_fragment,
        },
    };

    use super::{LogInData, LogInState, post_log_in};

    fn get_test_state() -> LogInState {
        LogInState {
            cookie_key: create_cookie_key("foobar"),
            latency: Duration::ZERO,
        }
    }

    async fn new_log_in_request(log_in_form: LogInData) -> Response<Body> {
        let state = get_test_state();
        let jar = PrivateCookieJar::new(state.cookie_key.clone());

        post_log_in(State(state), jar, Form(log_in_form)).await
    }

    fn log_in_data(email: &str, password: &str) -> LogInData {
        LogInData {
            email: email.to_owned(),
            password: password.to_owned(),
            redirect_url: None,
        }
    }

    #[tokio::test]
    async fn log_in_succeeds_with_valid_input() {
        let response = new_log_in_request(log_in_data("john@example.com", "hunter22")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::DASHBOARD_VIEW);
    }

    #[tokio::test]
    async fn log_in_redirects_to_requested_url() {
        let redirect_url = "/cards";

        let response = new_log_in_request(LogInData {
            redirect_url: Some(redirect_url.to_owned()),
            ..log_in_data("john@example.com", "hunter22")
        })
        .await;

        assert_hx_redirect(&response, redirect_url);
    }

    #[tokio::test]
    async fn log_in_falls_back_on_invalid_redirect_url() {
        let response = new_log_in_request(LogInData {
            redirect_url: Some("https://example.com".to_owned()),
            ..log_in_data("john@example.com", "hunter22")
        })
        .await;

        assert_hx_redirect(&response, endpoints::DASHBOARD_VIEW);
    }

    #[tokio::test]
    async fn log_in_sets_session_cookie_with_mock_user() {
        let state = get_test_state();
        let app = Router::new()
            .route(endpoints::LOG_IN_API, post(post_log_in))
            .with_state(state.clone());
        let server = TestServer::new(app);

        let response = server
            .post(endpoints::LOG_IN_API)
            .form(&[("email", "ada@example.com"), ("password", "hunter22")])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        let cookie = response.cookie(SESSION_KEY);
        let user = decrypt_session_user(&cookie, state.cookie_key);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.balance, 250_000.0);
    }

    #[tokio::test]
    async fn empty_email_shows_error() {
        let response = new_log_in_request(log_in_data("", "hunter22")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        let form = html
            .select(&scraper::Selector::parse("form").unwrap())
            .next()
            .unwrap();
        assert_form_error_message(&form, "Email is required");
    }

    #[tokio::test]
    async fn malformed_email_shows_error() {
        let response = new_log_in_request(log_in_data("john@example", "hunter22")).await;

        let html = parse_html_fragment(response).await;
        let form = html
            .select(&scraper::Selector::parse("form").unwrap())
            .next()
            .unwrap();
        assert_form_error_message(&form, "Invalid email address");
    }

    #[tokio::test]
    async fn empty_password_shows_error() {
        let response = new_log_in_request(log_in_data("john@example.com", "")).await;

        let html = parse_html_fragment(response).await;
        let form = html
            .select(&scraper::Selector::parse("form").unwrap())
            .next()
            .unwrap();
        assert_form_error_message(&form, "Password is required");
    }
}
