//! Authentication middleware that restores the session and turns away signed out users.

use std::time::Duration;

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;

use crate::{
    AppState,
    auth::build_log_in_redirect_url,
    session::{CookieStorage, SessionStore},
};

/// The state needed for the auth middleware
#[derive(Clone)]
pub struct AuthState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookie_key.clone()
    }
}

#[inline]
async fn auth_guard_internal(
    state: AuthState,
    request: Request,
    next: Next,
    get_redirect: impl Fn(String) -> Response,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(error) => {
            tracing::error!("Error getting cookie jar: {error:?}. Redirecting to log in page.");
            let request = Request::from_parts(parts, body);
            return get_redirect(build_log_in_redirect_url(&request));
        }
    };

    // Only reading the session, so there is no backend call to wait for.
    let session = SessionStore::load(CookieStorage::new(jar), Duration::ZERO);
    let Some(user) = session.user().cloned() else {
        let request = Request::from_parts(parts, body);
        return get_redirect(build_log_in_redirect_url(&request));
    };

    parts.extensions.insert(user);
    next.run(Request::from_parts(parts, body)).await
}

/// Middleware function that checks for a signed in user in the session cookie.
/// The user is placed into the request and then the request executed normally if there is one, otherwise a redirect to the log-in page is returned.
///
/// **Note**: Route handlers can use the function argument `Extension(user): Extension<User>` to receive the user.
///
/// **Note**: The app state must contain an `axum_extra::extract::cookie::Key` for decrypting the cookie contents.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    auth_guard_internal(state, request, next, |redirect_url| {
        Redirect::to(&redirect_url).into_response()
    })
    .await
}

/// Middleware function that checks for a signed in user in the session cookie.
/// The user is placed into the request and then the request executed normally if there is one, otherwise a HTMX redirect to the log-in page is returned.
///
/// **Note**: Route handlers can use the function argument `Extension(user): Extension<User>` to receive the user.
///
/// **Note**: The app state must contain an `axum_extra::extract::cookie::Key` for decrypting the cookie contents.
pub async fn auth_guard_hx(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    auth_guard_internal(state, request, next, |redirect_url| {
        (HxRedirect(redirect_url), StatusCode::OK).into_response()
    })
    .await
}
