//! Data points pushed to a metric through its integration key.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};

/// One data point; the server uses the receive time when `timestamp` is unset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Unix time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    pub value: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CreateSeriesInput {
    pub integration_key: Option<String>,
    pub series: Option<SeriesPoint>,
}

impl IlertClient {
    /// Push a data point to a metric
    pub async fn create_series(&self, input: &CreateSeriesInput) -> Result<()> {
        let key = required(input.integration_key.as_deref(), "integration key")?;
        let series = required(input.series.as_ref(), "series")?;
        let url = self.url(&[&routes::SERIES, &key])?;
        self.send(
            Method::POST,
            url,
            &Query::new(),
            Some(series),
            &[StatusCode::ACCEPTED],
        )
        .await?;
        Ok(())
    }
}
