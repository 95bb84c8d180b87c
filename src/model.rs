//! Plain data carried by the UI components.

use serde::{Deserialize, Serialize};

/// A user profile shown in the server info header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub profile_name: String,
    /// Avatar URL, rendered as a CSS background image.
    pub image: String,
}

impl User {
    pub fn new(profile_name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            profile_name: profile_name.into(),
            image: image.into(),
        }
    }
}

/// Local state of the account panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    pub account_name: String,
    /// Sign-in flag, kept as text because it is only ever displayed.
    pub signed_in: String,
}

impl Default for AccountState {
    fn default() -> Self {
        Self {
            account_name: "craig.tf".to_string(),
            signed_in: "true".to_string(),
        }
    }
}

/// A channel entry. Nothing populates these yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
}
