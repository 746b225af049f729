//! Metrics chart operational numbers on status pages.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::metric_data_source::MetricDataSource;
use crate::types::TeamRef;

api_enum! {
    pub enum MetricAggregationType {
        Average => "AVG",
        Sum => "SUM",
        Minimum => "MIN",
        Maximum => "MAX",
        Last => "LAST",
    }
}

api_enum! {
    pub enum MetricDisplayType {
        Graph => "GRAPH",
        Single => "SINGLE",
    }
}

api_enum! {
    pub enum MetricInclude {
        IntegrationKey => "integrationKey",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation_type: Option<MetricAggregationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<MetricDisplayType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolate_gaps: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_y_axis_max: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_y_axis_min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_over_decimal: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_values_on_mouse_over: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_key: Option<String>,

    /// Set for metrics pulled from a data source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetricProviderMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<MetricDataSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricProviderMetadata {
    /// Query in the data source's language
    pub query: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateMetricInput {
    pub metric: Option<Metric>,
}

#[derive(Debug, Clone)]
pub struct CreateMetricOutput {
    pub metric: Metric,
}

#[derive(Debug, Clone, Default)]
pub struct GetMetricsInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub include: Vec<MetricInclude>,
}

#[derive(Debug, Clone)]
pub struct GetMetricsOutput {
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Default)]
pub struct GetMetricInput {
    pub metric_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetMetricOutput {
    pub metric: Metric,
}

#[derive(Debug, Clone, Default)]
pub struct SearchMetricInput {
    pub metric_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchMetricOutput {
    pub metric: Metric,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMetricInput {
    pub metric_id: Option<i64>,
    pub metric: Option<Metric>,
}

#[derive(Debug, Clone)]
pub struct UpdateMetricOutput {
    pub metric: Metric,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteMetricInput {
    pub metric_id: Option<i64>,
}

impl IlertClient {
    /// Create a metric
    pub async fn create_metric(&self, input: &CreateMetricInput) -> Result<CreateMetricOutput> {
        let metric = required(input.metric.as_ref(), "metric")?;
        let url = self.url(&[&routes::METRICS])?;
        let metric = self.post_json(url, metric).await?;
        Ok(CreateMetricOutput { metric })
    }

    /// List metrics
    pub async fn get_metrics(&self, input: &GetMetricsInput) -> Result<GetMetricsOutput> {
        let url = self.url(&[&routes::METRICS])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .each("include", &input.include);
        let metrics = self.get_json(url, &query).await?;
        Ok(GetMetricsOutput { metrics })
    }

    /// Get a metric by id
    pub async fn get_metric(&self, input: &GetMetricInput) -> Result<GetMetricOutput> {
        let id = required(input.metric_id, "metric id")?;
        let url = self.url(&[&routes::METRICS, &id])?;
        let metric = self.get_json(url, &Query::new()).await?;
        Ok(GetMetricOutput { metric })
    }

    /// Find a metric by exact name
    pub async fn search_metric(&self, input: &SearchMetricInput) -> Result<SearchMetricOutput> {
        let name = required(input.metric_name.as_deref(), "metric name")?;
        let url = self.url(&[&routes::METRICS, &routes::NAME, &name])?;
        let metric = self.get_json(url, &Query::new()).await?;
        Ok(SearchMetricOutput { metric })
    }

    /// Update a metric
    pub async fn update_metric(&self, input: &UpdateMetricInput) -> Result<UpdateMetricOutput> {
        let id = required(input.metric_id, "metric id")?;
        let metric = required(input.metric.as_ref(), "metric")?;
        let url = self.url(&[&routes::METRICS, &id])?;
        let metric = self.put_json(url, metric).await?;
        Ok(UpdateMetricOutput { metric })
    }

    /// Delete a metric
    pub async fn delete_metric(&self, input: &DeleteMetricInput) -> Result<()> {
        let id = required(input.metric_id, "metric id")?;
        let url = self.url(&[&routes::METRICS, &id])?;
        self.delete_resource(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_metric_from_data_source() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/metrics"))
            .and(body_partial_json(json!({
                "name": "p99 latency",
                "aggregationType": "AVG",
                "displayType": "GRAPH",
                "metadata": {"query": "histogram_quantile(0.99, rate(http_seconds_bucket[5m]))"},
                "dataSource": {"id": 4}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 30,
                "name": "p99 latency",
                "aggregationType": "AVG",
                "displayType": "GRAPH",
                "unitLabel": "s"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_metric(&CreateMetricInput {
                metric: Some(Metric {
                    name: "p99 latency".to_string(),
                    aggregation_type: Some(MetricAggregationType::Average),
                    display_type: Some(MetricDisplayType::Graph),
                    metadata: Some(MetricProviderMetadata {
                        query: "histogram_quantile(0.99, rate(http_seconds_bucket[5m]))"
                            .to_string(),
                    }),
                    data_source: Some(MetricDataSource::with_id(4)),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!(output.metric.id, Some(30));
        assert_eq!(output.metric.unit_label.as_deref(), Some("s"));
    }

    #[tokio::test]
    async fn test_get_metrics_include_integration_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/metrics"))
            .and(query_param("include", "integrationKey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 31, "name": "signups", "integrationKey": "il1met1"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_metrics(&GetMetricsInput {
                include: vec![MetricInclude::IntegrationKey],
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(output.metrics[0].integration_key.as_deref(), Some("il1met1"));
    }

    #[tokio::test]
    async fn test_update_metric_requires_metric() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .update_metric(&UpdateMetricInput {
                metric_id: Some(30),
                metric: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "metric is required");
    }
}
