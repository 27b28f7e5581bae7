//! Log-out route handler that clears the session and redirects users.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    endpoints,
    session::{CookieStorage, SessionStore},
};

/// Clear the session and redirect the client to the log-in page.
pub async fn get_log_out(jar: PrivateCookieJar) -> Response {
    // Logging out is local, there is no backend call to wait for.
    let mut session = SessionStore::load(CookieStorage::new(jar), std::time::Duration::ZERO);

    if let Some(user) = session.user() {
        tracing::info!("User {} signed out", user.id);
    }

    session.log_out();

    (session.into_storage().into_jar(), Redirect::to(endpoints::LOG_IN_VIEW)).into_response()
}

#[cfg(test)]
mod log_out_tests {
    use axum::{
        Router,
        http::{StatusCode, header::SET_COOKIE},
        routing::get,
    };
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;
    use time::OffsetDateTime;

    use crate::{
        AppState, endpoints,
        session::SESSION_KEY,
        test_utils::{session_cookie, test_app_state, test_user},
    };

    use super::get_log_out;

    #[tokio::test]
    async fn log_out_clears_session_and_redirects() {
        let state: AppState = test_app_state();
        let cookie = session_cookie(&test_user(), &state.cookie_key);
        let app = Router::new()
            .route(endpoints::LOG_OUT, get(get_log_out))
            .with_state(state);
        let server = TestServer::new(app);

        let response = server.get(endpoints::LOG_OUT).add_cookie(cookie).await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), endpoints::LOG_IN_VIEW);

        let removal_cookie = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|header| Cookie::parse(header.to_str().unwrap().to_owned()).unwrap())
            .find(|cookie| cookie.name() == SESSION_KEY)
            .expect("want session cookie to be removed");
        assert!(
            removal_cookie
                .expires_datetime()
                .is_some_and(|expires| expires < OffsetDateTime::now_utc()),
            "want expired session cookie, got {removal_cookie:?}"
        );
    }
}
