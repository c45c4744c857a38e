// Guest endpoints
//
// Staff read access to guest records. New guests sign up through
// `ApiClient::register`.

use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, query};
use crate::error::Error;

/// Handle for `/guests`, borrowed from an [`ApiClient`].
pub struct Guests<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn guests(&self) -> Guests<'_> {
        Guests { client: self }
    }
}

impl Guests<'_> {
    /// `GET /guests`
    pub async fn all(&self) -> Result<Vec<Value>, Error> {
        debug!("listing guests");
        self.client.get("/guests").await?.data_or_default()
    }

    /// `GET /guests/{id}`
    pub async fn get(&self, id: i64) -> Result<Value, Error> {
        debug!(id, "fetching guest");
        self.client
            .get(&format!("/guests/{id}"))
            .await?
            .data_or_default()
    }

    /// `GET /guests/search/name?name=`
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Value>, Error> {
        debug!(name, "searching guests by name");
        let path = format!("/guests/search/name?{}", query(&[("name", name)]));
        self.client.get(&path).await?.data_or_default()
    }

    /// `GET /guests/search/phone?phone=`
    pub async fn search_by_phone(&self, phone: &str) -> Result<Vec<Value>, Error> {
        debug!(phone, "searching guests by phone");
        let path = format!("/guests/search/phone?{}", query(&[("phone", phone)]));
        self.client.get(&path).await?.data_or_default()
    }

    /// `GET /guests/search/id-card?idCardNumber=`
    ///
    /// The server answers unknown numbers with `success: false` and no data,
    /// which comes back as `null`.
    pub async fn find_by_id_card(&self, id_card_number: &str) -> Result<Value, Error> {
        debug!("looking up guest by id card");
        let path = format!(
            "/guests/search/id-card?{}",
            query(&[("idCardNumber", id_card_number)])
        );
        self.client.get(&path).await?.data_or_default()
    }
}
