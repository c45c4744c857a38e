// Reservation endpoints
//
// Guests create, list and cancel their own bookings (`/reservations/me`);
// staff work with the full `/reservations` collection.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, encode_segment};
use crate::envelope::Envelope;
use crate::error::Error;

/// Handle for `/reservations`, borrowed from an [`ApiClient`].
pub struct Reservations<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn reservations(&self) -> Reservations<'_> {
        Reservations { client: self }
    }
}

impl Reservations<'_> {
    /// `GET /reservations`
    pub async fn all(&self) -> Result<Vec<Value>, Error> {
        debug!("listing reservations");
        self.client.get("/reservations").await?.data_or_default()
    }

    /// `GET /reservations/{id}`
    pub async fn get(&self, id: i64) -> Result<Value, Error> {
        debug!(id, "fetching reservation");
        self.client
            .get(&format!("/reservations/{id}"))
            .await?
            .data_or_default()
    }

    /// Reservations of the logged-in guest.
    ///
    /// `GET /reservations/me`
    pub async fn mine(&self) -> Result<Vec<Value>, Error> {
        debug!("listing own reservations");
        self.client.get("/reservations/me").await?.data_or_default()
    }

    /// `GET /reservations/status/{status}`, e.g. `CONFIRMED`, `CHECKED_IN`.
    pub async fn by_status(&self, status: &str) -> Result<Vec<Value>, Error> {
        debug!(status, "listing reservations by status");
        let path = format!("/reservations/status/{}", encode_segment(status));
        self.client.get(&path).await?.data_or_default()
    }

    /// `GET /reservations/guest/{guest_id}`
    pub async fn for_guest(&self, guest_id: i64) -> Result<Vec<Value>, Error> {
        debug!(guest_id, "listing reservations for guest");
        self.client
            .get(&format!("/reservations/guest/{guest_id}"))
            .await?
            .data_or_default()
    }

    /// `POST /reservations`
    pub async fn create(&self, reservation: &(impl Serialize + Sync)) -> Result<Value, Error> {
        debug!("creating reservation");
        self.client
            .post("/reservations", reservation)
            .await?
            .data_or_default()
    }

    /// `PUT /reservations/{id}`
    pub async fn update(
        &self,
        id: i64,
        reservation: &(impl Serialize + Sync),
    ) -> Result<Value, Error> {
        debug!(id, "updating reservation");
        self.client
            .put(&format!("/reservations/{id}"), reservation)
            .await?
            .data_or_default()
    }

    /// `POST /reservations/{id}/cancel` (no body)
    pub async fn cancel(&self, id: i64) -> Result<Value, Error> {
        debug!(id, "cancelling reservation");
        self.client
            .post_empty(&format!("/reservations/{id}/cancel"))
            .await?
            .data_or_default()
    }

    /// `DELETE /reservations/{id}`. Returns the whole envelope.
    pub async fn delete(&self, id: i64) -> Result<Envelope, Error> {
        debug!(id, "deleting reservation");
        self.client.delete(&format!("/reservations/{id}")).await
    }
}
