// Authentication and session helpers
//
// Login posts credentials to `/auth/login` and, when the envelope carries a
// token, persists token, role and identity through the session store.
// Logout clears all three and navigates to the surface's login page.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Error;
use crate::surface::Surface;

/// Staff and guest roles known to the backend.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Receptionist,
    Guest,
}

/// Body of `POST /auth/login`.
///
/// The guest site identifies by email and sends the role; the back office
/// identifies by username and keeps the role to itself.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl<'a> LoginRequest<'a> {
    pub fn for_surface(
        surface: Surface,
        identifier: &'a str,
        password: &'a SecretString,
        role: Option<Role>,
    ) -> Self {
        match surface {
            Surface::Admin => Self {
                username: Some(identifier),
                email: None,
                password: password.expose_secret(),
                role: None,
            },
            Surface::Guest => Self {
                username: None,
                email: Some(identifier),
                password: password.expose_secret(),
                role,
            },
        }
    }
}

/// Snapshot of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub surface: Surface,
    pub authenticated: bool,
    pub role: Option<Role>,
    pub identity: Option<String>,
}

impl ApiClient {
    /// Log in with an identifier (username or email) and password.
    ///
    /// `POST /auth/login`
    ///
    /// The envelope is returned whether or not login succeeded; only a
    /// successful envelope carrying a token changes the session. When
    /// `role` is `None` the surface default applies (`GUEST` on the guest
    /// surface, nothing on the admin surface).
    pub async fn login(
        &self,
        identifier: &str,
        password: &SecretString,
        role: Option<Role>,
    ) -> Result<Envelope, Error> {
        let surface = self.surface();
        let role = role.or_else(|| surface.default_role());
        let body = LoginRequest::for_surface(surface, identifier, password, role);

        debug!(%surface, identifier, "logging in");
        let envelope = self.post("/auth/login", &body).await?;

        let token = if envelope.success { envelope.token() } else { None };
        let Some(token) = token else {
            warn!(message = envelope.message(), "login returned no token");
            return Ok(envelope);
        };

        self.set_token(Some(token))?;
        let keys = self.storage_keys();
        match role {
            Some(role) => self.store().set(&keys.role, role.as_ref())?,
            None => self.store().remove(&keys.role)?,
        }
        self.store().set(&keys.identity, identifier)?;

        info!(%surface, identifier, "login successful");
        Ok(envelope)
    }

    /// End the session locally and navigate to the login page.
    ///
    /// No request is sent; the server holds no session state beyond the token.
    pub fn logout(&self) -> Result<(), Error> {
        self.set_token(None)?;
        let keys = self.storage_keys();
        self.store().remove(&keys.role)?;
        self.store().remove(&keys.identity)?;

        info!(surface = %self.surface(), "logged out");
        self.navigator().navigate(self.surface().login_page());
        Ok(())
    }

    /// Register a new guest account.
    ///
    /// `POST /guests`
    pub async fn register(&self, guest: &(impl Serialize + Sync)) -> Result<Envelope, Error> {
        debug!("registering guest");
        self.post("/guests", guest).await
    }

    /// `true` iff a token is held in memory.
    pub fn is_authenticated(&self) -> bool {
        self.has_token()
    }

    /// The persisted role. Unrecognized values read as `None`.
    pub fn user_role(&self) -> Result<Option<Role>, Error> {
        let Some(raw) = self.store().get(&self.storage_keys().role)? else {
            return Ok(None);
        };
        match raw.parse::<Role>() {
            Ok(role) => Ok(Some(role)),
            Err(_) => {
                warn!(role = %raw, "ignoring unrecognized persisted role");
                Ok(None)
            }
        }
    }

    /// The persisted identity (username or email).
    pub fn identity(&self) -> Result<Option<String>, Error> {
        self.store().get(&self.storage_keys().identity)
    }

    pub fn session(&self) -> Result<SessionInfo, Error> {
        Ok(SessionInfo {
            surface: self.surface(),
            authenticated: self.is_authenticated(),
            role: self.user_role()?,
            identity: self.identity()?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn role_round_trips_through_storage_format() {
        assert_eq!(Role::Receptionist.as_ref(), "RECEPTIONIST");
        assert_eq!("manager".parse::<Role>().unwrap(), Role::Manager);
        assert!("undefined".parse::<Role>().is_err());
    }

    #[test]
    fn guest_login_body_uses_email_and_role() {
        let secret = SecretString::from("hunter22".to_owned());
        let body = LoginRequest::for_surface(Surface::Guest, "ann@example.com", &secret, Some(Role::Guest));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "email": "ann@example.com", "password": "hunter22", "role": "GUEST" })
        );
    }

    #[test]
    fn admin_login_body_omits_role() {
        let secret = SecretString::from("s3cret".to_owned());
        let body = LoginRequest::for_surface(Surface::Admin, "frontdesk", &secret, Some(Role::Manager));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "username": "frontdesk", "password": "s3cret" })
        );
    }
}
