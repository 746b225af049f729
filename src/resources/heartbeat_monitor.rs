//! Heartbeat monitors raise an alert when a job stops checking in.

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::alert_source::AlertSource;
use crate::types::TeamRef;

api_enum! {
    pub enum HeartbeatMonitorState {
        Unknown => "UNKNOWN",
        Expired => "EXPIRED",
        Healthy => "HEALTHY",
    }
}

api_enum! {
    pub enum HeartbeatMonitorInclude {
        IntegrationUrl => "integrationUrl",
    }
}

/// HTTP method used to ping a heartbeat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PingMethod {
    #[default]
    Head,
    Get,
    Post,
}

impl From<PingMethod> for Method {
    fn from(method: PingMethod) -> Self {
        match method {
            PingMethod::Head => Method::HEAD,
            PingMethod::Get => Method::GET,
            PingMethod::Post => Method::POST,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeartbeatMonitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HeartbeatMonitorState>,

    /// Seconds without a ping before the monitor expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_sec: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_source: Option<AlertSource>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateHeartbeatMonitorInput {
    pub heartbeat_monitor: Option<HeartbeatMonitor>,
}

#[derive(Debug, Clone)]
pub struct CreateHeartbeatMonitorOutput {
    pub heartbeat_monitor: HeartbeatMonitor,
}

#[derive(Debug, Clone, Default)]
pub struct GetHeartbeatMonitorsInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub include: Vec<HeartbeatMonitorInclude>,
}

#[derive(Debug, Clone)]
pub struct GetHeartbeatMonitorsOutput {
    pub heartbeat_monitors: Vec<HeartbeatMonitor>,
}

#[derive(Debug, Clone, Default)]
pub struct GetHeartbeatMonitorInput {
    pub heartbeat_monitor_id: Option<i64>,
    pub include: Vec<HeartbeatMonitorInclude>,
}

#[derive(Debug, Clone)]
pub struct GetHeartbeatMonitorOutput {
    pub heartbeat_monitor: HeartbeatMonitor,
}

#[derive(Debug, Clone, Default)]
pub struct SearchHeartbeatMonitorInput {
    pub heartbeat_monitor_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchHeartbeatMonitorOutput {
    pub heartbeat_monitor: HeartbeatMonitor,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateHeartbeatMonitorInput {
    pub heartbeat_monitor_id: Option<i64>,
    pub heartbeat_monitor: Option<HeartbeatMonitor>,
}

#[derive(Debug, Clone)]
pub struct UpdateHeartbeatMonitorOutput {
    pub heartbeat_monitor: HeartbeatMonitor,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteHeartbeatMonitorInput {
    pub heartbeat_monitor_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct PingHeartbeatInput {
    pub integration_key: Option<String>,

    /// Defaults to `HEAD`
    pub method: Option<PingMethod>,
}

impl IlertClient {
    /// Create a heartbeat monitor
    pub async fn create_heartbeat_monitor(
        &self,
        input: &CreateHeartbeatMonitorInput,
    ) -> Result<CreateHeartbeatMonitorOutput> {
        let monitor = required(input.heartbeat_monitor.as_ref(), "heartbeat monitor")?;
        let url = self.url(&[&routes::HEARTBEAT_MONITORS])?;
        let heartbeat_monitor = self.post_json(url, monitor).await?;
        Ok(CreateHeartbeatMonitorOutput { heartbeat_monitor })
    }

    /// List heartbeat monitors
    pub async fn get_heartbeat_monitors(
        &self,
        input: &GetHeartbeatMonitorsInput,
    ) -> Result<GetHeartbeatMonitorsOutput> {
        let url = self.url(&[&routes::HEARTBEAT_MONITORS])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .each("include", &input.include);
        let heartbeat_monitors = self.get_json(url, &query).await?;
        Ok(GetHeartbeatMonitorsOutput { heartbeat_monitors })
    }

    /// Get a heartbeat monitor by id
    pub async fn get_heartbeat_monitor(
        &self,
        input: &GetHeartbeatMonitorInput,
    ) -> Result<GetHeartbeatMonitorOutput> {
        let id = required(input.heartbeat_monitor_id, "heartbeat monitor id")?;
        let url = self.url(&[&routes::HEARTBEAT_MONITORS, &id])?;
        let query = Query::new().each("include", &input.include);
        let heartbeat_monitor = self.get_json(url, &query).await?;
        Ok(GetHeartbeatMonitorOutput { heartbeat_monitor })
    }

    /// Find a heartbeat monitor by exact name
    pub async fn search_heartbeat_monitor(
        &self,
        input: &SearchHeartbeatMonitorInput,
    ) -> Result<SearchHeartbeatMonitorOutput> {
        let name = required(
            input.heartbeat_monitor_name.as_deref(),
            "heartbeat monitor name",
        )?;
        let url = self.url(&[&routes::HEARTBEAT_MONITORS, &routes::NAME, &name])?;
        let heartbeat_monitor = self.get_json(url, &Query::new()).await?;
        Ok(SearchHeartbeatMonitorOutput { heartbeat_monitor })
    }

    /// Update a heartbeat monitor
    pub async fn update_heartbeat_monitor(
        &self,
        input: &UpdateHeartbeatMonitorInput,
    ) -> Result<UpdateHeartbeatMonitorOutput> {
        let id = required(input.heartbeat_monitor_id, "heartbeat monitor id")?;
        let monitor = required(input.heartbeat_monitor.as_ref(), "heartbeat monitor")?;
        let url = self.url(&[&routes::HEARTBEAT_MONITORS, &id])?;
        let heartbeat_monitor = self.put_json(url, monitor).await?;
        Ok(UpdateHeartbeatMonitorOutput { heartbeat_monitor })
    }

    /// Delete a heartbeat monitor
    pub async fn delete_heartbeat_monitor(
        &self,
        input: &DeleteHeartbeatMonitorInput,
    ) -> Result<()> {
        let id = required(input.heartbeat_monitor_id, "heartbeat monitor id")?;
        let url = self.url(&[&routes::HEARTBEAT_MONITORS, &id])?;
        self.delete_resource(url).await
    }

    /// Report that the monitored job is alive
    pub async fn ping_heartbeat(&self, input: &PingHeartbeatInput) -> Result<()> {
        let key = required(input.integration_key.as_deref(), "integration key")?;
        let url = self.url(&[&routes::HEARTBEATS, &key])?;
        let method = input.method.unwrap_or_default();
        self.send_empty(method.into(), url, &Query::new(), &[StatusCode::ACCEPTED])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_ping_heartbeat_defaults_to_head() {
        let mock_server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(path("/heartbeats/il1hbt123"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let result = client
            .ping_heartbeat(&PingHeartbeatInput {
                integration_key: Some("il1hbt123".to_string()),
                method: None,
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_ping_heartbeat_post() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/heartbeats/il1hbt123"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        client
            .ping_heartbeat(&PingHeartbeatInput {
                integration_key: Some("il1hbt123".to_string()),
                method: Some(PingMethod::Post),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_ping_heartbeat_requires_key() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .ping_heartbeat(&PingHeartbeatInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "integration key is required");
    }

    #[tokio::test]
    async fn test_create_heartbeat_monitor() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/heartbeat-monitors"))
            .and(body_partial_json(json!({"name": "nightly backup", "intervalSec": 86400})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 90,
                "name": "nightly backup",
                "state": "UNKNOWN",
                "intervalSec": 86400,
                "integrationKey": "il1hbt123"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_heartbeat_monitor(&CreateHeartbeatMonitorInput {
                heartbeat_monitor: Some(HeartbeatMonitor {
                    name: "nightly backup".to_string(),
                    interval_sec: Some(86400),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        let monitor = output.heartbeat_monitor;
        assert_eq!(monitor.state, Some(HeartbeatMonitorState::Unknown));
        assert_eq!(monitor.integration_key.as_deref(), Some("il1hbt123"));
    }
}
