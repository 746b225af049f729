//! Connections are the older form of alert actions, keyed by alert source
//! ids instead of embedded alert sources. New code should prefer
//! [`AlertAction`](crate::resources::alert_action::AlertAction).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::alert_action::{
    AlertActionParams, AlertActionTriggerMode, AlertActionTriggerType,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Connection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub alert_source_ids: Vec<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<String>,

    #[serde(
        flatten,
        with = "crate::provider",
        skip_serializing_if = "Option::is_none"
    )]
    pub params: Option<AlertActionParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_mode: Option<AlertActionTriggerMode>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trigger_types: Vec<AlertActionTriggerType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateConnectionInput {
    pub connection: Option<Connection>,
}

#[derive(Debug, Clone)]
pub struct CreateConnectionOutput {
    pub connection: Connection,
}

#[derive(Debug, Clone, Default)]
pub struct GetConnectionsInput {}

#[derive(Debug, Clone)]
pub struct GetConnectionsOutput {
    pub connections: Vec<Connection>,
}

#[derive(Debug, Clone, Default)]
pub struct GetConnectionInput {
    pub connection_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetConnectionOutput {
    pub connection: Connection,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateConnectionInput {
    pub connection_id: Option<String>,
    pub connection: Option<Connection>,
}

#[derive(Debug, Clone)]
pub struct UpdateConnectionOutput {
    pub connection: Connection,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteConnectionInput {
    pub connection_id: Option<String>,
}

impl IlertClient {
    /// Create a connection
    pub async fn create_connection(
        &self,
        input: &CreateConnectionInput,
    ) -> Result<CreateConnectionOutput> {
        let connection = required(input.connection.as_ref(), "connection")?;
        let url = self.url(&[&routes::CONNECTIONS])?;
        let connection = self.post_json(url, connection).await?;
        Ok(CreateConnectionOutput { connection })
    }

    /// List connections
    pub async fn get_connections(
        &self,
        _input: &GetConnectionsInput,
    ) -> Result<GetConnectionsOutput> {
        let url = self.url(&[&routes::CONNECTIONS])?;
        let connections = self.get_json(url, &Query::new()).await?;
        Ok(GetConnectionsOutput { connections })
    }

    /// Get a connection by id
    pub async fn get_connection(&self, input: &GetConnectionInput) -> Result<GetConnectionOutput> {
        let id = required(input.connection_id.as_deref(), "connection id")?;
        let url = self.url(&[&routes::CONNECTIONS, &id])?;
        let connection = self.get_json(url, &Query::new()).await?;
        Ok(GetConnectionOutput { connection })
    }

    /// Update a connection
    pub async fn update_connection(
        &self,
        input: &UpdateConnectionInput,
    ) -> Result<UpdateConnectionOutput> {
        let id = required(input.connection_id.as_deref(), "connection id")?;
        let connection = required(input.connection.as_ref(), "connection")?;
        let url = self.url(&[&routes::CONNECTIONS, &id])?;
        let connection = self.put_json(url, connection).await?;
        Ok(UpdateConnectionOutput { connection })
    }

    /// Delete a connection
    pub async fn delete_connection(&self, input: &DeleteConnectionInput) -> Result<()> {
        let id = required(input.connection_id.as_deref(), "connection id")?;
        let url = self.url(&[&routes::CONNECTIONS, &id])?;
        self.delete_resource(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use crate::resources::alert_action::EmailActionParams;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_connection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/connections"))
            .and(body_json(json!({
                "name": "Mail ops",
                "alertSourceIds": [31, 32],
                "connectorType": "email",
                "params": {"recipients": ["ops@example.com"]}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "k1",
                "name": "Mail ops",
                "alertSourceIds": [31, 32],
                "connectorType": "email",
                "params": {"recipients": ["ops@example.com"]}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_connection(&CreateConnectionInput {
                connection: Some(Connection {
                    name: "Mail ops".to_string(),
                    alert_source_ids: vec![31, 32],
                    params: Some(AlertActionParams::Email(Some(EmailActionParams {
                        recipients: vec!["ops@example.com".to_string()],
                        ..Default::default()
                    }))),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!(output.connection.id.as_deref(), Some("k1"));
        assert_eq!(output.connection.alert_source_ids, vec![31, 32]);
    }

    #[test]
    fn test_connection_round_trip() {
        let body = json!({
            "id": "k2",
            "name": "Teams",
            "alertSourceIds": [],
            "connectorId": "c1",
            "connectorType": "microsoft_teams",
            "params": {"webhookUrl": "https://teams.example/hook"},
            "triggerMode": "AUTOMATIC",
            "triggerTypes": ["alert-created", "alert-acknowledged"],
            "createdAt": "2024-05-01T10:00:00Z"
        });
        let connection: Connection = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&connection).unwrap(), body);
    }

    #[test]
    fn test_connection_without_params_keeps_connector_type() {
        let connection: Connection = serde_json::from_value(json!({
            "id": "k3",
            "name": "Mail",
            "connectorType": "email"
        }))
        .unwrap();
        assert_eq!(connection.params, Some(AlertActionParams::Email(None)));
        assert_eq!(
            serde_json::to_value(&connection).unwrap()["connectorType"],
            "email"
        );
    }

    #[tokio::test]
    async fn test_get_connection_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/connections/k404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": 404,
                "code": "NOT_FOUND",
                "message": "connection not found"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let err = client
            .get_connection(&GetConnectionInput {
                connection_id: Some("k404".to_string()),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "NOT_FOUND: connection not found");
    }

    #[tokio::test]
    async fn test_update_connection_requires_id() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .update_connection(&UpdateConnectionInput {
                connection_id: None,
                connection: Some(Connection::default()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "connection id is required");
    }
}
