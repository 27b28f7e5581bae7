//! Sending money to another bank account.
//!
//! The flow moves through the steps details, confirm and success. The
//! recipient's account must be verified before the details can be submitted.

mod flow;
mod handlers;
mod view;

pub use handlers::{
    get_transfer_page, post_transfer_confirm, post_transfer_details, post_transfer_edit,
    post_transfer_recipient,
};
