//! The session of the signed in user.
//!
//! The user is kept as a JSON blob under a single storage key. In the server
//! that storage is an encrypted private cookie, so the session survives
//! restarts of the server but not clearing the browser's cookies.

mod storage;
mod store;
mod user;

pub use storage::{CookieStorage, SessionStorage};
pub use store::{SESSION_KEY, SessionStore};
pub use user::User;

#[cfg(test)]
pub use storage::MemoryStorage;
