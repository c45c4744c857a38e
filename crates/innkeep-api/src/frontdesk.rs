// Front desk endpoints
//
// Check-in and check-out act on a reservation. Both return the whole
// envelope so the desk can show the server's message.

use serde_json::{Map, Value};
use tracing::debug;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Error;

/// Handle for `/frontdesk`, borrowed from an [`ApiClient`].
pub struct FrontDesk<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn front_desk(&self) -> FrontDesk<'_> {
        FrontDesk { client: self }
    }
}

impl FrontDesk<'_> {
    /// `POST /frontdesk/checkin/{reservation_id}`. Sends `{}` without details.
    pub async fn check_in(
        &self,
        reservation_id: i64,
        details: Option<&Value>,
    ) -> Result<Envelope, Error> {
        debug!(reservation_id, "checking in");
        let path = format!("/frontdesk/checkin/{reservation_id}");
        self.client.post(&path, &body_or_empty(details)).await
    }

    /// `POST /frontdesk/checkout/{reservation_id}`. Sends `{}` without details.
    pub async fn check_out(
        &self,
        reservation_id: i64,
        details: Option<&Value>,
    ) -> Result<Envelope, Error> {
        debug!(reservation_id, "checking out");
        let path = format!("/frontdesk/checkout/{reservation_id}");
        self.client.post(&path, &body_or_empty(details)).await
    }
}

fn body_or_empty(details: Option<&Value>) -> Value {
    details.cloned().unwrap_or_else(|| Value::Object(Map::new()))
}
