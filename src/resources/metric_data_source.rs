//! External systems that metrics pull their values from.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::provider::ProviderParams;
use crate::types::TeamRef;

api_enum! {
    pub enum PrometheusAuthType {
        NoAuth => "NONE",
        Basic => "BASIC",
        Header => "HEADER",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(
        flatten,
        with = "crate::provider",
        skip_serializing_if = "Option::is_none"
    )]
    pub params: Option<MetricDataSourceParams>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,
}

impl MetricDataSource {
    /// Reference a data source by id
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

/// Backend of a data source together with its connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "UPPERCASE")]
pub enum MetricDataSourceParams {
    Datadog(Option<DatadogDataSourceParams>),
    Prometheus(Option<PrometheusDataSourceParams>),
    /// Backend not modelled by this crate, kept as sent
    #[serde(skip)]
    Other {
        provider: String,
        params: Option<Value>,
    },
}

impl ProviderParams for MetricDataSourceParams {
    const TAG: &'static str = "type";

    fn other(provider: String, params: Option<Value>) -> Self {
        MetricDataSourceParams::Other { provider, params }
    }

    fn as_other(&self) -> Option<(&str, Option<&Value>)> {
        match self {
            MetricDataSourceParams::Other { provider, params } => {
                Some((provider, params.as_ref()))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatadogDataSourceParams {
    /// Datadog site, e.g. `EU1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrometheusDataSourceParams {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<PrometheusAuthType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_pass: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_value: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateMetricDataSourceInput {
    pub metric_data_source: Option<MetricDataSource>,
}

#[derive(Debug, Clone)]
pub struct CreateMetricDataSourceOutput {
    pub metric_data_source: MetricDataSource,
}

#[derive(Debug, Clone, Default)]
pub struct GetMetricDataSourcesInput {}

#[derive(Debug, Clone)]
pub struct GetMetricDataSourcesOutput {
    pub metric_data_sources: Vec<MetricDataSource>,
}

#[derive(Debug, Clone, Default)]
pub struct GetMetricDataSourceInput {
    pub metric_data_source_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetMetricDataSourceOutput {
    pub metric_data_source: MetricDataSource,
}

#[derive(Debug, Clone, Default)]
pub struct SearchMetricDataSourceInput {
    pub metric_data_source_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchMetricDataSourceOutput {
    pub metric_data_source: MetricDataSource,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMetricDataSourceInput {
    pub metric_data_source_id: Option<i64>,
    pub metric_data_source: Option<MetricDataSource>,
}

#[derive(Debug, Clone)]
pub struct UpdateMetricDataSourceOutput {
    pub metric_data_source: MetricDataSource,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteMetricDataSourceInput {
    pub metric_data_source_id: Option<i64>,
}

impl IlertClient {
    /// Create a metric data source
    pub async fn create_metric_data_source(
        &self,
        input: &CreateMetricDataSourceInput,
    ) -> Result<CreateMetricDataSourceOutput> {
        let source = required(input.metric_data_source.as_ref(), "metric data source")?;
        let url = self.url(&[&routes::METRIC_DATA_SOURCES])?;
        let metric_data_source = self.post_json(url, source).await?;
        Ok(CreateMetricDataSourceOutput { metric_data_source })
    }

    /// List metric data sources
    pub async fn get_metric_data_sources(
        &self,
        _input: &GetMetricDataSourcesInput,
    ) -> Result<GetMetricDataSourcesOutput> {
        let url = self.url(&[&routes::METRIC_DATA_SOURCES])?;
        let metric_data_sources = self.get_json(url, &Query::new()).await?;
        Ok(GetMetricDataSourcesOutput {
            metric_data_sources,
        })
    }

    /// Get a metric data source by id
    pub async fn get_metric_data_source(
        &self,
        input: &GetMetricDataSourceInput,
    ) -> Result<GetMetricDataSourceOutput> {
        let id = required(input.metric_data_source_id, "metric data source id")?;
        let url = self.url(&[&routes::METRIC_DATA_SOURCES, &id])?;
        let metric_data_source = self.get_json(url, &Query::new()).await?;
        Ok(GetMetricDataSourceOutput { metric_data_source })
    }

    /// Find a metric data source by exact name
    pub async fn search_metric_data_source(
        &self,
        input: &SearchMetricDataSourceInput,
    ) -> Result<SearchMetricDataSourceOutput> {
        let name = required(
            input.metric_data_source_name.as_deref(),
            "metric data source name",
        )?;
        let url = self.url(&[&routes::METRIC_DATA_SOURCES, &routes::NAME, &name])?;
        let metric_data_source = self.get_json(url, &Query::new()).await?;
        Ok(SearchMetricDataSourceOutput { metric_data_source })
    }

    /// Update a metric data source
    pub async fn update_metric_data_source(
        &self,
        input: &UpdateMetricDataSourceInput,
    ) -> Result<UpdateMetricDataSourceOutput> {
        let id = required(input.metric_data_source_id, "metric data source id")?;
        let source = required(input.metric_data_source.as_ref(), "metric data source")?;
        let url = self.url(&[&routes::METRIC_DATA_SOURCES, &id])?;
        let metric_data_source = self.put_json(url, source).await?;
        Ok(UpdateMetricDataSourceOutput { metric_data_source })
    }

    /// Delete a metric data source
    pub async fn delete_metric_data_source(
        &self,
        input: &DeleteMetricDataSourceInput,
    ) -> Result<()> {
        let id = required(input.metric_data_source_id, "metric data source id")?;
        let url = self.url(&[&routes::METRIC_DATA_SOURCES, &id])?;
        self.delete_resource(url).await
    }
}
