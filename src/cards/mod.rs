//! Viewing, freezing and issuing debit cards.

mod handlers;
mod view;

pub use handlers::{
    get_card, get_cards_page, post_creating_card, post_issue_card, post_toggle_card,
};
