//! Incidents communicate service disruptions to stakeholders and status
//! page subscribers.

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::service::{Service, ServiceStatus};
use crate::types::TeamRef;

api_enum! {
    pub enum IncidentStatus {
        Investigating => "INVESTIGATING",
        Identified => "IDENTIFIED",
        Monitoring => "MONITORING",
        Resolved => "RESOLVED",
    }
}

api_enum! {
    pub enum IncidentInclude {
        Subscribed => "subscribed",
        AffectedTeams => "affectedTeams",
        History => "history",
    }
}

api_enum! {
    pub enum SubscriberType {
        Team => "TEAM",
        User => "USER",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Incident {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_services: Vec<AffectedService>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_teams: Vec<TeamRef>,
}

/// A service hit by an incident and how badly
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffectedService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<ServiceStatus>,

    pub service: Service,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subscriber {
    pub id: i64,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub subscriber_type: Option<SubscriberType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateIncidentInput {
    pub incident: Option<Incident>,
}

#[derive(Debug, Clone)]
pub struct CreateIncidentOutput {
    pub incident: Incident,
}

#[derive(Debug, Clone, Default)]
pub struct GetIncidentsInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub include: Vec<IncidentInclude>,
    pub states: Vec<IncidentStatus>,
    pub services: Vec<i64>,
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct GetIncidentsOutput {
    pub incidents: Vec<Incident>,
}

#[derive(Debug, Clone, Default)]
pub struct GetIncidentInput {
    pub incident_id: Option<i64>,
    pub include: Vec<IncidentInclude>,
}

#[derive(Debug, Clone)]
pub struct GetIncidentOutput {
    pub incident: Incident,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateIncidentInput {
    pub incident_id: Option<i64>,
    pub incident: Option<Incident>,
}

#[derive(Debug, Clone)]
pub struct UpdateIncidentOutput {
    pub incident: Incident,
}

#[derive(Debug, Clone, Default)]
pub struct GetIncidentSubscribersInput {
    pub incident_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetIncidentSubscribersOutput {
    pub subscribers: Vec<Subscriber>,
}

#[derive(Debug, Clone, Default)]
pub struct AddIncidentSubscribersInput {
    pub incident_id: Option<i64>,
    pub subscribers: Vec<Subscriber>,
}

const PRIVATE: &str = "private";
const SUBSCRIBERS: &str = "subscribers";

impl IlertClient {
    /// Open an incident
    pub async fn create_incident(
        &self,
        input: &CreateIncidentInput,
    ) -> Result<CreateIncidentOutput> {
        let incident = required(input.incident.as_ref(), "incident")?;
        let url = self.url(&[&routes::INCIDENTS])?;
        let incident = self.post_json(url, incident).await?;
        Ok(CreateIncidentOutput { incident })
    }

    /// List incidents, optionally filtered by state, service and time range
    pub async fn get_incidents(&self, input: &GetIncidentsInput) -> Result<GetIncidentsOutput> {
        let url = self.url(&[&routes::INCIDENTS])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .each("include", &input.include)
            .each("states", &input.states)
            .each("services", &input.services)
            .date("from", input.from)
            .date("until", input.until);
        let incidents = self.get_json(url, &query).await?;
        Ok(GetIncidentsOutput { incidents })
    }

    /// Get an incident by id
    pub async fn get_incident(&self, input: &GetIncidentInput) -> Result<GetIncidentOutput> {
        let id = required(input.incident_id, "incident id")?;
        let url = self.url(&[&routes::INCIDENTS, &id])?;
        let query = Query::new().each("include", &input.include);
        let incident = self.get_json(url, &query).await?;
        Ok(GetIncidentOutput { incident })
    }

    /// Post an update to an incident
    pub async fn update_incident(
        &self,
        input: &UpdateIncidentInput,
    ) -> Result<UpdateIncidentOutput> {
        let id = required(input.incident_id, "incident id")?;
        let incident = required(input.incident.as_ref(), "incident")?;
        let url = self.url(&[&routes::INCIDENTS, &id])?;
        let incident = self.put_json(url, incident).await?;
        Ok(UpdateIncidentOutput { incident })
    }

    /// List users and teams subscribed to a private incident
    pub async fn get_incident_subscribers(
        &self,
        input: &GetIncidentSubscribersInput,
    ) -> Result<GetIncidentSubscribersOutput> {
        let id = required(input.incident_id, "incident id")?;
        let url = self.url(&[&routes::INCIDENTS, &id, &PRIVATE, &SUBSCRIBERS])?;
        let subscribers = self.get_json(url, &Query::new()).await?;
        Ok(GetIncidentSubscribersOutput { subscribers })
    }

    /// Subscribe users and teams to a private incident
    pub async fn add_incident_subscribers(&self, input: &AddIncidentSubscribersInput) -> Result<()> {
        let id = required(input.incident_id, "incident id")?;
        let url = self.url(&[&routes::INCIDENTS, &id, &PRIVATE, &SUBSCRIBERS])?;
        self.send(
            Method::POST,
            url,
            &Query::new(),
            Some(&input.subscribers),
            &[StatusCode::ACCEPTED],
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_incident_with_affected_service() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/incidents"))
            .and(body_partial_json(json!({
                "summary": "Payments delayed",
                "status": "INVESTIGATING",
                "affectedServices": [{"impact": "DEGRADED", "service": {"id": 12}}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 400,
                "summary": "Payments delayed",
                "status": "INVESTIGATING",
                "createdAt": "2024-05-01T10:00:00Z"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_incident(&CreateIncidentInput {
                incident: Some(Incident {
                    summary: "Payments delayed".to_string(),
                    status: Some(IncidentStatus::Investigating),
                    affected_services: vec![AffectedService {
                        impact: Some(ServiceStatus::Degraded),
                        service: Service::with_id(12),
                    }],
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!(output.incident.id, Some(400));
        assert!(output.incident.created_at.is_some());
    }

    #[tokio::test]
    async fn test_get_incidents_filters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/incidents"))
            .and(query_param("states", "MONITORING"))
            .and(query_param("services", "12"))
            .and(query_param("include", "affectedTeams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 400, "summary": "Payments delayed", "status": "MONITORING"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_incidents(&GetIncidentsInput {
                states: vec![IncidentStatus::Monitoring],
                services: vec![12],
                include: vec![IncidentInclude::AffectedTeams],
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.incidents.len(), 1);
        assert_eq!(output.incidents[0].status, Some(IncidentStatus::Monitoring));
    }

    #[tokio::test]
    async fn test_get_incident_subscribers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/incidents/400/private/subscribers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 5, "type": "TEAM", "name": "Ops"},
                {"id": 9, "type": "USER"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_incident_subscribers(&GetIncidentSubscribersInput {
                incident_id: Some(400),
            })
            .await
            .unwrap();

        assert_eq!(output.subscribers.len(), 2);
        assert_eq!(output.subscribers[0].subscriber_type, Some(SubscriberType::Team));
        assert_eq!(output.subscribers[1].name, None);
    }

    #[tokio::test]
    async fn test_add_incident_subscribers_accepted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/incidents/400/private/subscribers"))
            .and(body_json(json!([{"id": 9, "type": "USER"}])))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        client
            .add_incident_subscribers(&AddIncidentSubscribersInput {
                incident_id: Some(400),
                subscribers: vec![Subscriber {
                    id: 9,
                    subscriber_type: Some(SubscriberType::User),
                    name: None,
                }],
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_incident_subscribers_rejects_ok_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/incidents/400/private/subscribers"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let err = client
            .add_incident_subscribers(&AddIncidentSubscribersInput {
                incident_id: Some(400),
                subscribers: Vec::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "wrong status code 200");
    }

    #[tokio::test]
    async fn test_update_incident_requires_id() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .update_incident(&UpdateIncidentInput {
                incident_id: None,
                incident: Some(Incident::default()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "incident id is required");
    }
}
