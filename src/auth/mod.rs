//! Logging in, registering and logging out, and the middleware that keeps
//! signed out users away from the banking pages.

mod log_in;
mod log_out;
mod middleware;
mod redirect;
mod register_user;

pub use log_in::{get_log_in_page, post_log_in};
pub use log_out::get_log_out;
pub use middleware::{auth_guard, auth_guard_hx};
pub use register_user::{get_register_page, register_user};

use redirect::{build_log_in_redirect_url, normalize_redirect_url};

#[cfg(test)]
pub use middleware::AuthState;

/// The message under the email field when it does not look like an address.
const INVALID_EMAIL_MSG: &str = "Invalid email address";
