use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::auth::Role;
use crate::session::StorageKeys;

/// Which web front end a client speaks for.
///
/// Both surfaces share the same REST contract. They differ in server port,
/// storage keys, login body shape, and where logout lands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Staff back office.
    Admin,
    /// Public booking site.
    #[default]
    Guest,
}

impl Surface {
    /// Server the surface talks to when no URL is configured.
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Admin => "http://localhost:8081",
            Self::Guest => "http://localhost:8080",
        }
    }

    /// Storage keys the surface's web front end uses.
    pub fn storage_keys(self) -> StorageKeys {
        match self {
            Self::Admin => StorageKeys::admin(),
            Self::Guest => StorageKeys::guest(),
        }
    }

    /// Page shown after logout.
    pub fn login_page(self) -> &'static str {
        match self {
            Self::Admin => "/admin/login.html",
            Self::Guest => "/index.html",
        }
    }

    /// Role assumed at login when the caller supplies none.
    pub fn default_role(self) -> Option<Role> {
        match self {
            Self::Admin => None,
            Self::Guest => Some(Role::Guest),
        }
    }
}
