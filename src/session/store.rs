use std::time::Duration;

use crate::{
    Error,
    latency::simulate_round_trip,
    session::{SessionStorage, User},
};

/// The storage key the signed in user is saved under.
pub const SESSION_KEY: &str = "moopa_user";

/// Holds the signed in user, if any, and keeps `storage` in sync with it.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    user: Option<User>,
    latency: Duration,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Restore the session from `storage`.
    ///
    /// A missing key means nobody is logged in. A value that cannot be parsed
    /// is logged and also treated as logged out.
    pub fn load(storage: S, latency: Duration) -> Self {
        let user = storage
            .get_item(SESSION_KEY)
            .and_then(|json| match serde_json::from_str::<User>(&json) {
                Ok(user) => Some(user),
                Err(error) => {
                    tracing::warn!("Ignoring unreadable session data: {error}");
                    None
                }
            });

        Self {
            storage,
            user,
            latency,
        }
    }

    /// The signed in user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[cfg(test)]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Log in with an email and password.
    ///
    /// There is no backend, so after the simulated delay every log in succeeds
    /// as John Doe with the given email.
    ///
    /// # Errors
    ///
    /// Returns [Error::JSONSerializationError] if the user could not be saved.
    pub async fn log_in(&mut self, email: &str, _password: &str) -> Result<User, Error> {
        simulate_round_trip("log in", self.latency).await;

        let user = User {
            id: "12345".to_owned(),
            name: "John Doe".to_owned(),
            email: email.to_owned(),
            account_number: "202412345678".to_owned(),
            balance: 250_000.0,
        };

        self.set_user(user)
    }

    /// Open a new account.
    ///
    /// Like [SessionStore::log_in], this always succeeds after the simulated
    /// delay. New accounts start with a balance of ₦10,000.
    ///
    /// # Errors
    ///
    /// Returns [Error::JSONSerializationError] if the user could not be saved.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<User, Error> {
        simulate_round_trip("register", self.latency).await;

        let user = User {
            id: "12345".to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            account_number: "202412345678".to_owned(),
            balance: 10_000.0,
        };

        self.set_user(user)
    }

    /// Forget the signed in user and remove them from storage.
    pub fn log_out(&mut self) {
        self.user = None;
        self.storage.remove_item(SESSION_KEY);
    }

    /// Get the storage back, e.g. to return the updated cookies.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn set_user(&mut self, user: User) -> Result<User, Error> {
        let json = serde_json::to_string(&user)?;
        self.storage.set_item(SESSION_KEY, json);
        self.user = Some(user.clone());

        tracing::info!("User {} signed in", user.id);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::session::{MemoryStorage, SESSION_KEY, SessionStorage, User};

    use super::SessionStore;

    fn new_store() -> SessionStore<MemoryStorage> {
        SessionStore::load(MemoryStorage::default(), Duration::ZERO)
    }

    #[test]
    fn empty_storage_is_logged_out() {
        let store = new_store();

        assert!(!store.is_authenticated());
        assert_eq!(store.user(), None);
    }

    #[test]
    fn unreadable_storage_is_logged_out() {
        let mut storage = MemoryStorage::default();
        storage.set_item(SESSION_KEY, "{not json".to_owned());

        let store = SessionStore::load(storage, Duration::ZERO);

        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn log_in_saves_user() {
        let mut store = new_store();

        let user = store.log_in("john@example.com", "hunter22").await.unwrap();

        assert_eq!(user.id, "12345");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.account_number, "202412345678");
        assert_eq!(user.balance, 250_000.0);
        assert_eq!(store.user(), Some(&user));

        let storage = store.into_storage();
        let stored: User =
            serde_json::from_str(&storage.get_item(SESSION_KEY).unwrap()).unwrap();
        assert_eq!(stored, user);
    }

    #[tokio::test]
    async fn register_uses_name_and_starting_balance() {
        let mut store = new_store();

        let user = store
            .register("Ada Obi", "ada@example.com", "password123")
            .await
            .unwrap();

        assert_eq!(user.name, "Ada Obi");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.balance, 10_000.0);
    }

    #[tokio::test]
    async fn session_survives_reload() {
        let mut store = new_store();
        let user = store.log_in("john@example.com", "hunter22").await.unwrap();

        let reloaded = SessionStore::load(store.into_storage(), Duration::ZERO);

        assert_eq!(reloaded.user(), Some(&user));
    }

    #[tokio::test]
    async fn log_out_clears_user_and_storage() {
        let mut store = new_store();
        store.log_in("john@example.com", "hunter22").await.unwrap();

        store.log_out();

        assert!(!store.is_authenticated());
        assert_eq!(store.into_storage().get_item(SESSION_KEY), None);
    }
}
