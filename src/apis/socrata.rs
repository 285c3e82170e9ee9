use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::types::{IncidentSource, RawRecord, RawTable};

/// Unauthenticated client for one tabular dataset on a Socrata-style
/// open-data portal. Reads are anonymous and bounded; no app token, no
/// paging, one request per run.
pub struct SocrataClient {
    client: reqwest::Client,
    host: String,
    dataset: String,
}

impl SocrataClient {
    pub fn new(host: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            host: host.into(),
            dataset: dataset.into(),
        }
    }

    /// Resource endpoint for the dataset, per the portal convention
    /// `https://{host}/resource/{dataset}.json`.
    fn resource_url(&self) -> String {
        format!("https://{}/resource/{}.json", self.host, self.dataset)
    }
}

/// Decode a response payload into a raw table, bounding it to `limit` rows.
/// The portal honors `$limit` itself; the truncation here keeps the bound a
/// local guarantee rather than a remote courtesy.
pub fn parse_records(payload: &[u8], limit: u32) -> Result<RawTable> {
    let mut records: Vec<RawRecord> = serde_json::from_slice(payload)?;
    records.truncate(limit as usize);
    Ok(RawTable::new(records))
}

#[async_trait]
impl IncidentSource for SocrataClient {
    fn source_id(&self) -> String {
        format!("{}/{}", self.host, self.dataset)
    }

    #[instrument(skip(self), fields(dataset = %self.dataset))]
    async fn fetch_raw(&self, limit: u32) -> Result<RawTable> {
        let url = self.resource_url();
        debug!(%url, "requesting dataset rows");

        let response = self
            .client
            .get(&url)
            .query(&[("$limit", limit)])
            .send()
            .await?
            .error_for_status()?;
        let payload = response.bytes().await?;

        let table = parse_records(&payload, limit)?;
        info!(rows = table.len(), host = %self.host, "fetched raw records");
        Ok(table)
    }
}
