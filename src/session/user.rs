use serde::{Deserialize, Serialize};

/// The signed in user and their account.
///
/// A user is created with mock values when logging in or registering and is
/// never changed afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub account_number: String,
    /// The available balance in naira.
    pub balance: f64,
}
