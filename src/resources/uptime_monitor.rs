//! Uptime monitors probe hosts and URLs from ilert's regions and alert on
//! failures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::escalation_policy::EscalationPolicy;
use crate::types::TeamRef;

api_enum! {
    pub enum UptimeMonitorRegion {
        Eu => "EU",
        Us => "US",
    }
}

api_enum! {
    pub enum UptimeMonitorCheckType {
        Http => "http",
        Ping => "ping",
        Tcp => "tcp",
        Udp => "udp",
        Ssl => "ssl",
    }
}

api_enum! {
    pub enum UptimeMonitorStatus {
        Up => "up",
        Down => "down",
        Warn => "warn",
        Paused => "paused",
        Unknown => "unknown",
    }
}

api_enum! {
    pub enum UptimeMonitorInclude {
        EmbedUrl => "embedURL",
        ShareUrl => "shareURL",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UptimeMonitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<UptimeMonitorRegion>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_type: Option<UptimeMonitorCheckType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_params: Option<UptimeMonitorCheckParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_sec: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_incident_after_failed_checks: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_policy: Option<EscalationPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,

    #[serde(rename = "embedURL", skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,

    #[serde(rename = "shareURL", skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UptimeMonitorStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status_change: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,
}

/// Probe settings; which fields apply depends on the check type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UptimeMonitorCheckParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub response_keywords: Vec<String>,

    /// For `ssl` checks: alert this many seconds before expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_before_sec: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_on_fingerprint_change: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateUptimeMonitorInput {
    pub uptime_monitor: Option<UptimeMonitor>,
}

#[derive(Debug, Clone)]
pub struct CreateUptimeMonitorOutput {
    pub uptime_monitor: UptimeMonitor,
}

#[derive(Debug, Clone, Default)]
pub struct GetUptimeMonitorsInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub include: Vec<UptimeMonitorInclude>,
}

#[derive(Debug, Clone)]
pub struct GetUptimeMonitorsOutput {
    pub uptime_monitors: Vec<UptimeMonitor>,
}

#[derive(Debug, Clone, Default)]
pub struct GetUptimeMonitorsCountInput {}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetUptimeMonitorsCountOutput {
    pub count: i64,
}

#[derive(Debug, Clone, Default)]
pub struct GetUptimeMonitorInput {
    pub uptime_monitor_id: Option<i64>,
    pub include: Vec<UptimeMonitorInclude>,
}

#[derive(Debug, Clone)]
pub struct GetUptimeMonitorOutput {
    pub uptime_monitor: UptimeMonitor,
}

#[derive(Debug, Clone, Default)]
pub struct SearchUptimeMonitorInput {
    pub uptime_monitor_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchUptimeMonitorOutput {
    pub uptime_monitor: UptimeMonitor,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUptimeMonitorInput {
    pub uptime_monitor_id: Option<i64>,
    pub uptime_monitor: Option<UptimeMonitor>,
}

#[derive(Debug, Clone)]
pub struct UpdateUptimeMonitorOutput {
    pub uptime_monitor: UptimeMonitor,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteUptimeMonitorInput {
    pub uptime_monitor_id: Option<i64>,
}

impl IlertClient {
    /// Create an uptime monitor
    pub async fn create_uptime_monitor(
        &self,
        input: &CreateUptimeMonitorInput,
    ) -> Result<CreateUptimeMonitorOutput> {
        let monitor = required(input.uptime_monitor.as_ref(), "uptime monitor")?;
        let url = self.url(&[&routes::UPTIME_MONITORS])?;
        let uptime_monitor = self.post_json(url, monitor).await?;
        Ok(CreateUptimeMonitorOutput { uptime_monitor })
    }

    /// List uptime monitors
    pub async fn get_uptime_monitors(
        &self,
        input: &GetUptimeMonitorsInput,
    ) -> Result<GetUptimeMonitorsOutput> {
        let url = self.url(&[&routes::UPTIME_MONITORS])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .each("include", &input.include);
        let uptime_monitors = self.get_json(url, &query).await?;
        Ok(GetUptimeMonitorsOutput { uptime_monitors })
    }

    /// Count uptime monitors
    pub async fn get_uptime_monitors_count(
        &self,
        _input: &GetUptimeMonitorsCountInput,
    ) -> Result<GetUptimeMonitorsCountOutput> {
        let url = self.url(&[&routes::UPTIME_MONITORS, &"count"])?;
        self.get_json(url, &Query::new()).await
    }

    /// Get an uptime monitor by id
    pub async fn get_uptime_monitor(
        &self,
        input: &GetUptimeMonitorInput,
    ) -> Result<GetUptimeMonitorOutput> {
        let id = required(input.uptime_monitor_id, "uptime monitor id")?;
        let url = self.url(&[&routes::UPTIME_MONITORS, &id])?;
        let query = Query::new().each("include", &input.include);
        let uptime_monitor = self.get_json(url, &query).await?;
        Ok(GetUptimeMonitorOutput { uptime_monitor })
    }

    /// Find an uptime monitor by exact name
    pub async fn search_uptime_monitor(
        &self,
        input: &SearchUptimeMonitorInput,
    ) -> Result<SearchUptimeMonitorOutput> {
        let name = required(input.uptime_monitor_name.as_deref(), "uptime monitor name")?;
        let url = self.url(&[&routes::UPTIME_MONITORS, &routes::NAME, &name])?;
        let uptime_monitor = self.get_json(url, &Query::new()).await?;
        Ok(SearchUptimeMonitorOutput { uptime_monitor })
    }

    /// Update an uptime monitor
    pub async fn update_uptime_monitor(
        &self,
        input: &UpdateUptimeMonitorInput,
    ) -> Result<UpdateUptimeMonitorOutput> {
        let id = required(input.uptime_monitor_id, "uptime monitor id")?;
        let monitor = required(input.uptime_monitor.as_ref(), "uptime monitor")?;
        let url = self.url(&[&routes::UPTIME_MONITORS, &id])?;
        let uptime_monitor = self.put_json(url, monitor).await?;
        Ok(UpdateUptimeMonitorOutput { uptime_monitor })
    }

    /// Delete an uptime monitor
    pub async fn delete_uptime_monitor(&self, input: &DeleteUptimeMonitorInput) -> Result<()> {
        let id = required(input.uptime_monitor_id, "uptime monitor id")?;
        let url = self.url(&[&routes::UPTIME_MONITORS, &id])?;
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
    async fn test_create_http_uptime_monitor() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/uptime-monitors"))
            .and(body_partial_json(json!({
                "name": "homepage",
                "region": "EU",
                "checkType": "http",
                "checkParams": {"url": "https://example.com", "responseKeywords": ["Welcome"]},
                "escalationPolicy": {"id": 8}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 60,
                "name": "homepage",
                "region": "EU",
                "checkType": "http",
                "status": "unknown"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_uptime_monitor(&CreateUptimeMonitorInput {
                uptime_monitor: Some(UptimeMonitor {
                    name: "homepage".to_string(),
                    region: Some(UptimeMonitorRegion::Eu),
                    check_type: Some(UptimeMonitorCheckType::Http),
                    check_params: Some(UptimeMonitorCheckParams {
                        url: Some("https://example.com".to_string()),
                        response_keywords: vec!["Welcome".to_string()],
                        ..Default::default()
                    }),
                    escalation_policy: Some(EscalationPolicy {
                        id: Some(8),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!(output.uptime_monitor.id, Some(60));
        assert_eq!(
            output.uptime_monitor.status,
            Some(UptimeMonitorStatus::Unknown)
        );
    }

    #[tokio::test]
    async fn test_get_uptime_monitor_include_urls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/uptime-monitors/60"))
            .and(query_param("include", "shareURL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 60,
                "name": "homepage",
                "shareURL": "https://uptime.ilert.com/share/abc"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_uptime_monitor(&GetUptimeMonitorInput {
                uptime_monitor_id: Some(60),
                include: vec![UptimeMonitorInclude::ShareUrl],
            })
            .await
            .unwrap();
        assert_eq!(
            output.uptime_monitor.share_url.as_deref(),
            Some("https://uptime.ilert.com/share/abc")
        );
    }

    #[tokio::test]
    async fn test_get_uptime_monitors_count() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/uptime-monitors/count"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 17})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_uptime_monitors_count(&GetUptimeMonitorsCountInput {})
            .await
            .unwrap();
        assert_eq!(output.count, 17);
    }

    #[tokio::test]
    async fn test_delete_uptime_monitor_requires_id() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .delete_uptime_monitor(&DeleteUptimeMonitorInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "uptime monitor id is required");
    }
}
