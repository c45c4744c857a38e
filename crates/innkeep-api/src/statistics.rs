// Statistics endpoints
//
// Reports are loosely-typed JSON objects whose keys depend on the report.
// Absent data reads as an empty object.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;

/// Handle for `/api/statistics`, borrowed from an [`ApiClient`].
pub struct Statistics<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn statistics(&self) -> Statistics<'_> {
        Statistics { client: self }
    }
}

impl Statistics<'_> {
    /// `GET /api/statistics/today`
    pub async fn today(&self) -> Result<Map<String, Value>, Error> {
        debug!("fetching today's statistics");
        self.client
            .get("/api/statistics/today")
            .await?
            .data_or_default()
    }

    /// `GET /api/statistics/date-range?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD`
    pub async fn date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Map<String, Value>, Error> {
        debug!(%start, %end, "fetching date-range statistics");
        let path = format!(
            "/api/statistics/date-range?startDate={}&endDate={}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );
        self.client.get(&path).await?.data_or_default()
    }

    /// `GET /api/statistics/room-types`
    pub async fn room_types(&self) -> Result<Map<String, Value>, Error> {
        debug!("fetching room-type statistics");
        self.client
            .get("/api/statistics/room-types")
            .await?
            .data_or_default()
    }
}
