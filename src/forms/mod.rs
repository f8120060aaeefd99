pub mod login;
pub mod signup;

use serde::{Deserialize, Serialize};

/// Account role picked at signup. Two variants only; there is no
/// "unselected" state to represent. Serialized lowercase as the signup
/// endpoint expects; the backend answers with its uppercase enum values,
/// so those are accepted on the way back in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[serde(alias = "CUSTOMER")]
    Customer,
    #[serde(alias = "PROVIDER")]
    Provider,
}

impl Role {
    /// Parses a form value, falling back to the default for anything that
    /// is not one of the two known roles.
    pub fn from_form_value(value: &str) -> Role {
        match value {
            "provider" => Role::Provider,
            _ => Role::Customer,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
        }
    }

    pub fn from_path(value: &str) -> Option<OAuthProvider> {
        match value {
            "google" => Some(OAuthProvider::Google),
            "facebook" => Some(OAuthProvider::Facebook),
            _ => None,
        }
    }
}
