// Room endpoints
//
// `/rooms` is shared by both surfaces: guests browse, staff manage.
// Room payloads are passed through as untyped JSON.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, encode_segment};
use crate::envelope::Envelope;
use crate::error::Error;

/// Handle for `/rooms`, borrowed from an [`ApiClient`].
pub struct Rooms<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn rooms(&self) -> Rooms<'_> {
        Rooms { client: self }
    }
}

impl Rooms<'_> {
    /// `GET /rooms`
    pub async fn all(&self) -> Result<Vec<Value>, Error> {
        debug!("listing rooms");
        self.client.get("/rooms").await?.data_or_default()
    }

    /// `GET /rooms/{id}`
    pub async fn get(&self, id: i64) -> Result<Value, Error> {
        debug!(id, "fetching room");
        self.client.get(&format!("/rooms/{id}")).await?.data_or_default()
    }

    /// Rooms bookable between two dates.
    ///
    /// Fetches every room; narrowing by date is left to the caller.
    pub async fn available(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<Value>, Error> {
        debug!(%check_in, %check_out, "listing available rooms");
        self.all().await
    }

    /// `GET /rooms/type/{room_type}`
    pub async fn by_type(&self, room_type: &str) -> Result<Vec<Value>, Error> {
        debug!(room_type, "listing rooms by type");
        let path = format!("/rooms/type/{}", encode_segment(room_type));
        self.client.get(&path).await?.data_or_default()
    }

    /// `GET /rooms/active`
    pub async fn active(&self) -> Result<Vec<Value>, Error> {
        debug!("listing active rooms");
        self.client.get("/rooms/active").await?.data_or_default()
    }

    /// `POST /rooms`
    pub async fn create(&self, room: &(impl Serialize + Sync)) -> Result<Value, Error> {
        debug!("creating room");
        self.client.post("/rooms", room).await?.data_or_default()
    }

    /// `PUT /rooms/{id}`
    pub async fn update(&self, id: i64, room: &(impl Serialize + Sync)) -> Result<Value, Error> {
        debug!(id, "updating room");
        self.client
            .put(&format!("/rooms/{id}"), room)
            .await?
            .data_or_default()
    }

    /// `DELETE /rooms/{id}`. Returns the whole envelope.
    pub async fn delete(&self, id: i64) -> Result<Envelope, Error> {
        debug!(id, "deleting room");
        self.client.delete(&format!("/rooms/{id}")).await
    }
}
