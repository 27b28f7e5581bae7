//! The settings page with the profile, security and notification tabs.
//!
//! There is no backend to save to, so saving waits for the simulated delay,
//! shows the submitted values and leaves the signed in user unchanged.

mod handlers;
mod view;

pub use handlers::{
    get_settings_page, post_notification_settings, post_profile_settings,
    post_security_settings,
};
