//! Connectors hold the credentials of a third-party system that alert
//! actions push to.
//!
//! The provider is the `type` field, and `params` carries the provider's
//! credentials. Both are modelled as one [`ConnectorParams`] value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::provider::ProviderParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Connector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(
        flatten,
        with = "crate::provider",
        skip_serializing_if = "Option::is_none"
    )]
    pub params: Option<ConnectorParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Provider of a connector together with its credentials
///
/// `params` may be omitted by the API, hence the `Option` in every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
pub enum ConnectorParams {
    Datadog(Option<ApiKeyParams>),
    Jira(Option<AccountParams>),
    MicrosoftTeams(Option<UrlParams>),
    #[serde(rename = "servicenow")]
    ServiceNow(Option<AccountParams>),
    Slack(Option<NoParams>),
    Webhook(Option<NoParams>),
    Zendesk(Option<AccountParams>),
    Discord(Option<UrlParams>),
    Github(Option<ApiKeyParams>),
    Topdesk(Option<AccountParams>),
    AwsLambda(Option<AuthorizationParams>),
    #[serde(rename = "azure_faas")]
    AzureFunction(Option<AuthorizationParams>),
    #[serde(rename = "google_faas")]
    GoogleFunction(Option<AuthorizationParams>),
    Sysdig(Option<ApiKeyParams>),
    Zapier(Option<ApiKeyParams>),
    Autotask(Option<AccountParams>),
    Zammad(Option<AccountParams>),
    Mattermost(Option<UrlParams>),
    #[serde(rename = "statuspageio")]
    StatusPageIo(Option<ApiKeyParams>),
    Email(Option<NoParams>),
    /// Provider not modelled by this crate, kept as sent
    #[serde(skip)]
    Other {
        provider: String,
        params: Option<Value>,
    },
}

impl ConnectorParams {
    /// Wire name of the provider
    pub fn connector_type(&self) -> &str {
        match self {
            ConnectorParams::Datadog(_) => "datadog",
            ConnectorParams::Jira(_) => "jira",
            ConnectorParams::MicrosoftTeams(_) => "microsoft_teams",
            ConnectorParams::ServiceNow(_) => "servicenow",
            ConnectorParams::Slack(_) => "slack",
            ConnectorParams::Webhook(_) => "webhook",
            ConnectorParams::Zendesk(_) => "zendesk",
            ConnectorParams::Discord(_) => "discord",
            ConnectorParams::Github(_) => "github",
            ConnectorParams::Topdesk(_) => "topdesk",
            ConnectorParams::AwsLambda(_) => "aws_lambda",
            ConnectorParams::AzureFunction(_) => "azure_faas",
            ConnectorParams::GoogleFunction(_) => "google_faas",
            ConnectorParams::Sysdig(_) => "sysdig",
            ConnectorParams::Zapier(_) => "zapier",
            ConnectorParams::Autotask(_) => "autotask",
            ConnectorParams::Zammad(_) => "zammad",
            ConnectorParams::Mattermost(_) => "mattermost",
            ConnectorParams::StatusPageIo(_) => "statuspageio",
            ConnectorParams::Email(_) => "email",
            ConnectorParams::Other { provider, .. } => provider.as_str(),
        }
    }
}

impl ProviderParams for ConnectorParams {
    const TAG: &'static str = "type";

    fn other(provider: String, params: Option<Value>) -> Self {
        ConnectorParams::Other { provider, params }
    }

    fn as_other(&self) -> Option<(&str, Option<&Value>)> {
        match self {
            ConnectorParams::Other { provider, params } => Some((provider, params.as_ref())),
            _ => None,
        }
    }
}

/// Params of providers that need no credentials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoParams {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiKeyParams {
    pub api_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlParams {
    pub url: String,
}

/// Account credentials; which fields a provider needs varies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Value sent in the `Authorization` header of function calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateConnectorInput {
    pub connector: Option<Connector>,
}

#[derive(Debug, Clone)]
pub struct CreateConnectorOutput {
    pub connector: Connector,
}

#[derive(Debug, Clone, Default)]
pub struct GetConnectorsInput {}

#[derive(Debug, Clone)]
pub struct GetConnectorsOutput {
    pub connectors: Vec<Connector>,
}

#[derive(Debug, Clone, Default)]
pub struct GetConnectorInput {
    pub connector_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetConnectorOutput {
    pub connector: Connector,
}

#[derive(Debug, Clone, Default)]
pub struct SearchConnectorInput {
    pub connector_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchConnectorOutput {
    pub connector: Connector,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateConnectorInput {
    pub connector_id: Option<String>,
    pub connector: Option<Connector>,
}

#[derive(Debug, Clone)]
pub struct UpdateConnectorOutput {
    pub connector: Connector,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteConnectorInput {
    pub connector_id: Option<String>,
}

impl IlertClient {
    /// Create a connector
    pub async fn create_connector(
        &self,
        input: &CreateConnectorInput,
    ) -> Result<CreateConnectorOutput> {
        let connector = required(input.connector.as_ref(), "connector")?;
        let url = self.url(&[&routes::CONNECTORS])?;
        let connector = self.post_json(url, connector).await?;
        Ok(CreateConnectorOutput { connector })
    }

    /// List connectors
    pub async fn get_connectors(&self, _input: &GetConnectorsInput) -> Result<GetConnectorsOutput> {
        let url = self.url(&[&routes::CONNECTORS])?;
        let connectors = self.get_json(url, &Query::new()).await?;
        Ok(GetConnectorsOutput { connectors })
    }

    /// Get a connector by id
    pub async fn get_connector(&self, input: &GetConnectorInput) -> Result<GetConnectorOutput> {
        let id = required(input.connector_id.as_deref(), "connector id")?;
        let url = self.url(&[&routes::CONNECTORS, &id])?;
        let connector = self.get_json(url, &Query::new()).await?;
        Ok(GetConnectorOutput { connector })
    }

    /// Find a connector by exact name
    pub async fn search_connector(
        &self,
        input: &SearchConnectorInput,
    ) -> Result<SearchConnectorOutput> {
        let name = required(input.connector_name.as_deref(), "connector name")?;
        let url = self.url(&[&routes::CONNECTORS, &routes::NAME, &name])?;
        let connector = self.get_json(url, &Query::new()).await?;
        Ok(SearchConnectorOutput { connector })
    }

    /// Update a connector
    pub async fn update_connector(
        &self,
        input: &UpdateConnectorInput,
    ) -> Result<UpdateConnectorOutput> {
        let id = required(input.connector_id.as_deref(), "connector id")?;
        let connector = required(input.connector.as_ref(), "connector")?;
        let url = self.url(&[&routes::CONNECTORS, &id])?;
        let connector = self.put_json(url, connector).await?;
        Ok(UpdateConnectorOutput { connector })
    }

    /// Delete a connector
    pub async fn delete_connector(&self, input: &DeleteConnectorInput) -> Result<()> {
        let id = required(input.connector_id.as_deref(), "connector id")?;
        let url = self.url(&[&routes::CONNECTORS, &id])?;
        self.delete_resource(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use crate::errors::IlertError;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_connector_params_are_tagged_by_type() {
        let connector = Connector {
            name: "Jira Cloud".to_string(),
            params: Some(ConnectorParams::Jira(Some(AccountParams {
                url: Some("https://acme.atlassian.net".to_string()),
                email: Some("bot@acme.io".to_string()),
                password: Some("token".to_string()),
                ..Default::default()
            }))),
            ..Default::default()
        };

        let value = serde_json::to_value(&connector).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Jira Cloud",
                "type": "jira",
                "params": {
                    "url": "https://acme.atlassian.net",
                    "email": "bot@acme.io",
                    "password": "token"
                }
            })
        );
    }

    #[test]
    fn test_connector_params_renamed_providers() {
        let connector: Connector = serde_json::from_value(json!({
            "id": "c1",
            "name": "Functions",
            "type": "azure_faas",
            "params": {"authorization": "key"}
        }))
        .unwrap();

        let params = connector.params.unwrap();
        assert_eq!(params.connector_type(), "azure_faas");
        assert_eq!(
            params,
            ConnectorParams::AzureFunction(Some(AuthorizationParams {
                authorization: Some("key".to_string())
            }))
        );
    }

    #[test]
    fn test_connector_without_params() {
        let connector: Connector =
            serde_json::from_value(json!({"id": "c2", "name": "Bare"})).unwrap();
        assert!(connector.params.is_none());
        assert_eq!(connector.id.as_deref(), Some("c2"));
    }

    #[test]
    fn test_connector_without_params_keeps_type() {
        for body in [
            json!({"id": "c4", "name": "Chat", "type": "slack"}),
            json!({"id": "c4", "name": "Chat", "type": "slack", "params": null}),
        ] {
            let connector: Connector = serde_json::from_value(body).unwrap();
            assert_eq!(connector.params, Some(ConnectorParams::Slack(None)));
            assert_eq!(
                serde_json::to_value(&connector).unwrap(),
                json!({"id": "c4", "name": "Chat", "type": "slack"})
            );
        }
    }

    #[test]
    fn test_unknown_connector_type_survives_update() {
        let body = json!({
            "id": "c5",
            "name": "Paging",
            "type": "pagerduty",
            "params": {"apiKey": "k"}
        });
        let connector: Connector = serde_json::from_value(body.clone()).unwrap();

        let params = connector.params.as_ref().unwrap();
        assert_eq!(params.connector_type(), "pagerduty");
        assert_eq!(serde_json::to_value(&connector).unwrap(), body);
    }

    #[test]
    fn test_malformed_connector_params_are_rejected() {
        let err = serde_json::from_value::<Connector>(json!({
            "id": "c6",
            "name": "Datadog",
            "type": "datadog",
            "params": {"apiKey": 5}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("datadog params"), "{err}");
    }

    #[test]
    fn test_connector_round_trip() {
        let body = json!({
            "id": "c7",
            "name": "Tickets",
            "type": "zendesk",
            "params": {"url": "https://acme.zendesk.com", "email": "bot@acme.io", "apiKey": "z"},
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-02T10:00:00Z"
        });
        let connector: Connector = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&connector).unwrap(), body);
    }

    #[tokio::test]
    async fn test_get_connector_with_malformed_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/connectors/c6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "c6",
                "name": "Datadog",
                "type": "datadog",
                "params": {"apiKey": 5}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let err = client
            .get_connector(&GetConnectorInput {
                connector_id: Some("c6".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, IlertError::Deserialize(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_create_connector() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/connectors"))
            .and(body_json(json!({
                "name": "Datadog",
                "type": "datadog",
                "params": {"apiKey": "dd-key"}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "c1",
                "name": "Datadog",
                "type": "datadog",
                "params": {"apiKey": "dd-key"},
                "createdAt": "2024-05-01T10:00:00Z"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_connector(&CreateConnectorInput {
                connector: Some(Connector {
                    name: "Datadog".to_string(),
                    params: Some(ConnectorParams::Datadog(Some(ApiKeyParams {
                        api_key: "dd-key".to_string(),
                    }))),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!(output.connector.id.as_deref(), Some("c1"));
        assert!(output.connector.created_at.is_some());
    }

    #[tokio::test]
    async fn test_search_connector() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/connectors/name/Team%20Chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "c3",
                "name": "Team Chat",
                "type": "slack",
                "params": {}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .search_connector(&SearchConnectorInput {
                connector_name: Some("Team Chat".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(
            output.connector.params,
            Some(ConnectorParams::Slack(Some(NoParams {})))
        );
    }

    #[tokio::test]
    async fn test_delete_connector_requires_id() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .delete_connector(&DeleteConnectorInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "connector id is required");
    }
}
