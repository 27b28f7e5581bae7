//! Paying for airtime, data bundles and TV subscriptions.
//!
//! The flow moves through the steps category, details, confirm and success.
//! Each step is rendered into the flow container by htmx and the values
//! entered so far travel with each request as form fields.

mod catalog;
mod flow;
mod handlers;
mod view;

pub use catalog::BillCategory;
pub use handlers::{
    get_bill_payment_page, post_bill_category, post_bill_confirm, post_bill_details,
    post_bill_edit, post_bill_form,
};
