use axum::{
    http::{HeaderMap, HeaderValue, header::COOKIE, header::SET_COOKIE},
    response::IntoResponse,
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key},
};

use crate::{
    AppState, Ledger, SimulatedLatency, User,
    session::{CookieStorage, SESSION_KEY, SessionStorage},
};

pub(crate) fn test_user() -> User {
    User {
        id: "12345".to_owned(),
        name: "John Doe".to_owned(),
        email: "john@example.com".to_owned(),
        account_number: "202412345678".to_owned(),
        balance: 250_000.0,
    }
}

/// App state with the demo ledger and no simulated delays.
pub(crate) fn test_app_state() -> AppState {
    AppState::with_ledger(
        "foobar",
        "Etc/UTC",
        SimulatedLatency::NONE,
        Ledger::with_demo_data().expect("Could not create demo ledger"),
    )
}

/// An encrypted session cookie for `user`, as the browser would send it.
pub(crate) fn session_cookie(user: &User, key: &Key) -> Cookie<'static> {
    let mut storage = CookieStorage::new(PrivateCookieJar::new(key.clone()));
    storage.set_item(
        SESSION_KEY,
        serde_json::to_string(user).expect("Could not serialize user"),
    );

    let response = storage.into_jar().into_response();
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("Set-Cookie header missing")
        .to_str()
        .expect("Could not convert to str");

    Cookie::parse(set_cookie.to_owned()).expect("Could not parse cookie")
}

/// Decrypt the session cookie sent back by the server.
#[track_caller]
pub(crate) fn decrypt_session_user(cookie: &Cookie<'_>, key: Key) -> User {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&format!("{}={}", cookie.name(), cookie.value()))
            .expect("Invalid cookie header"),
    );

    let jar = PrivateCookieJar::from_headers(&headers, key);
    let session = jar.get(SESSION_KEY).expect("No session cookie found");

    serde_json::from_str(session.value()).expect("Could not parse session user")
}
