// Staff user endpoints

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Error;

/// Handle for `/users`, borrowed from an [`ApiClient`].
pub struct Users<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }
}

impl Users<'_> {
    /// `GET /users`
    pub async fn all(&self) -> Result<Vec<Value>, Error> {
        debug!("listing users");
        self.client.get("/users").await?.data_or_default()
    }

    /// `POST /users`
    pub async fn create(&self, user: &(impl Serialize + Sync)) -> Result<Value, Error> {
        debug!("creating user");
        self.client.post("/users", user).await?.data_or_default()
    }

    /// `PUT /users/{id}`
    pub async fn update(&self, id: i64, user: &(impl Serialize + Sync)) -> Result<Value, Error> {
        debug!(id, "updating user");
        self.client
            .put(&format!("/users/{id}"), user)
            .await?
            .data_or_default()
    }

    /// `DELETE /users/{id}`. Returns the whole envelope.
    pub async fn delete(&self, id: i64) -> Result<Envelope, Error> {
        debug!(id, "deleting user");
        self.client.delete(&format!("/users/{id}")).await
    }
}
