use super::auth::TokenProvider;
use super::model::{Row, ValueRange};
use crate::{Error, Result};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Anything that can hand out the rows of a named range, such as `Sheet1!1:1`.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn read_range(&self, range: &str) -> Result<Vec<Row>>;
}

/// Read-only client for the Google Sheets v4 values API.
pub struct SheetsClient {
    base_url: Url,
    sheet_id: String,
    http: reqwest::Client,
    auth: TokenProvider,
}

impl SheetsClient {
    pub fn new(
        base_url: &str,
        sheet_id: impl Into<String>,
        http: reqwest::Client,
        auth: TokenProvider,
    ) -> Result<SheetsClient> {
        Ok(SheetsClient {
            base_url: Url::parse(base_url)?,
            sheet_id: sheet_id.into(),
            http,
            auth,
        })
    }

    fn range_url(&self, range: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Invalid Sheets API URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.sheet_id.as_str(), "values", range]);
        Ok(url)
    }
}

#[async_trait]
impl SheetSource for SheetsClient {
    async fn read_range(&self, range: &str) -> Result<Vec<Row>> {
        let url = self.range_url(range)?;
        let token = self.auth.access_token().await?;

        let response = self.http.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::SheetsApi(format!(
                "Reading {range} failed with {status}: {body}"
            )));
        }

        let value_range: ValueRange = response.json().await?;
        debug!(
            requested = range,
            returned = %value_range.range,
            rows = value_range.values.len(),
            "Read sheet range",
        );
        Ok(value_range.values)
    }
}
