//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::{Error, latency::SimulatedLatency, ledger::Ledger};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The local timezone as a canonical timezone name, e.g. "Africa/Lagos".
    pub local_timezone: String,

    /// How long each mocked backend call takes.
    pub latency: SimulatedLatency,

    /// The transactions and cards shown to the signed in user.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] with a ledger seeded with demo data.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Africa/Lagos".
    ///
    /// # Errors
    /// Returns an error if the demo data is invalid.
    pub fn new(
        cookie_secret: &str,
        local_timezone: &str,
        latency: SimulatedLatency,
    ) -> Result<Self, Error> {
        Ok(Self::with_ledger(
            cookie_secret,
            local_timezone,
            latency,
            Ledger::with_demo_data()?,
        ))
    }

    /// Create a new [AppState] around an existing ledger.
    pub fn with_ledger(
        cookie_secret: &str,
        local_timezone: &str,
        latency: SimulatedLatency,
        ledger: Ledger,
    ) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            local_timezone: local_timezone.to_owned(),
            latency,
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
