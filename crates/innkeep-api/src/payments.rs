// Payment endpoints
//
// `create` opens a payment for a reservation. `simulate` posts a fake
// provider callback marking a transaction paid; it exists for demos and
// tests and does not talk to any payment provider.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Error;

/// Prefix of provider transaction ids produced by [`Payments::simulate`].
pub const SIMULATED_PREFIX: &str = "SIM_";

/// Body of `POST /payments/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment<'a> {
    pub reservation_id: i64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'a str>,
}

/// Body of `POST /payments/callback`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCallback<'a> {
    pub transaction_id: &'a str,
    pub status: &'static str,
    pub provider_transaction_id: String,
}

/// `SIM_<unix millis>` for the given instant.
pub fn simulated_provider_id(at: DateTime<Utc>) -> String {
    format!("{SIMULATED_PREFIX}{}", at.timestamp_millis())
}

/// Handle for `/payments`, borrowed from an [`ApiClient`].
pub struct Payments<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn payments(&self) -> Payments<'_> {
        Payments { client: self }
    }
}

impl Payments<'_> {
    /// `POST /payments/create`
    pub async fn create(
        &self,
        reservation_id: i64,
        amount: f64,
        note: Option<&str>,
    ) -> Result<Value, Error> {
        debug!(reservation_id, amount, "creating payment");
        let body = CreatePayment {
            reservation_id,
            amount,
            note,
        };
        self.client
            .post("/payments/create", &body)
            .await?
            .data_or_default()
    }

    /// Report `transaction_id` as paid through a simulated provider callback.
    ///
    /// `POST /payments/callback`. Returns the whole envelope.
    pub async fn simulate(&self, transaction_id: &str) -> Result<Envelope, Error> {
        let body = PaymentCallback {
            transaction_id,
            status: "SUCCESS",
            provider_transaction_id: simulated_provider_id(Utc::now()),
        };
        info!(
            transaction_id,
            provider_transaction_id = %body.provider_transaction_id,
            "simulating payment callback"
        );
        self.client.post("/payments/callback", &body).await
    }
}
