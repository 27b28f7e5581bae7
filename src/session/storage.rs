//! Key-value storage for the session blob.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

/// A string key-value store that the session is persisted to.
pub trait SessionStorage {
    /// Get the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: String);

    /// Remove the value stored under `key`.
    fn remove_item(&mut self, key: &str);
}

/// How long the session cookie lasts after logging in.
pub const SESSION_COOKIE_DURATION: Duration = Duration::days(30);

/// Session storage backed by encrypted, http-only cookies.
///
/// Call [CookieStorage::into_jar] and return the jar from the handler so the
/// changes are sent back to the client.
#[derive(Debug, Clone)]
pub struct CookieStorage {
    jar: PrivateCookieJar,
}

impl CookieStorage {
    /// Wrap the cookie jar of the current request.
    pub fn new(jar: PrivateCookieJar) -> Self {
        Self { jar }
    }

    /// Get the cookie jar with any changes made to the session.
    pub fn into_jar(self) -> PrivateCookieJar {
        self.jar
    }
}

impl SessionStorage for CookieStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.jar
            .get(key)
            .map(|cookie| cookie.value_trimmed().to_owned())
    }

    fn set_item(&mut self, key: &str, value: String) {
        let cookie = Cookie::build((key.to_owned(), value))
            .path("/")
            .expires(OffsetDateTime::now_utc() + SESSION_COOKIE_DURATION)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true);

        self.jar = self.jar.clone().add(cookie);
    }

    fn remove_item(&mut self, key: &str) {
        // Removing a cookie the client sent adds an expired removal cookie to
        // the response.
        self.jar = self
            .jar
            .clone()
            .remove(Cookie::build(key.to_owned()).path("/"));
    }
}

/// Session storage held in memory.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.items.insert(key.to_owned(), value);
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}
