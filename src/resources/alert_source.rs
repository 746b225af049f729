//! Alert sources: integration endpoints that raise alerts.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::alert::AlertPriority;
use crate::resources::escalation_policy::EscalationPolicy;
use crate::resources::support_hour::SupportHour;
use crate::types::TeamRef;

api_enum! {
    /// Kind of integration behind an alert source
    pub enum AlertSourceIntegrationType {
        Nagios => "NAGIOS",
        Icinga => "ICINGA",
        Email => "EMAIL",
        Sms => "SMS",
        Api => "API",
        Crn => "CRN",
        Heartbeat => "HEARTBEAT",
        Prtg => "PRTG",
        Pingdom => "PINGDOM",
        CloudWatch => "CLOUDWATCH",
        AwsPersonalHealthDashboard => "AWSPHD",
        Stackdriver => "STACKDRIVER",
        Instana => "INSTANA",
        Zabbix => "ZABBIX",
        SolarWinds => "SOLARWINDS",
        Prometheus => "PROMETHEUS",
        NewRelic => "NEWRELIC",
        Grafana => "GRAFANA",
        GitHub => "GITHUB",
        GitLab => "GITLAB",
        Datadog => "DATADOG",
        UptimeRobot => "UPTIMEROBOT",
        AppDynamics => "APPDYNAMICS",
        Dynatrace => "DYNATRACE",
        Topdesk => "TOPDESK",
        StatusCake => "STATUSCAKE",
        Monitor => "MONITOR",
        Tool => "TOOL",
        CheckMk => "CHECKMK",
        Autotask => "AUTOTASK",
        AwsBudget => "AWSBUDGET",
        KentixAlarmManager => "KENTIXAM",
        Consul => "CONSUL",
        Zammad => "ZAMMAD",
        SignalFx => "SIGNALFX",
        Splunk => "SPLUNK",
        Kubernetes => "KUBERNETES",
        Sematext => "SEMATEXT",
        Sentry => "SENTRY",
        SumoLogic => "SUMOLOGIC",
        Raygun => "RAYGUN",
        MxToolbox => "MXTOOLBOX",
        EsWatcher => "ESWATCHER",
        AmazonSns => "AMAZONSNS",
        Kapacitor => "KAPACITOR",
        CortexXsoar => "CORTEXXSOAR",
        Sysdig => "SYSDIG",
        ServerDensity => "SERVERDENSITY",
        Zapier => "ZAPIER",
        ServiceNow => "SERVICENOW",
        SearchGuard => "SEARCHGUARD",
        AzureAlerts => "AZUREALERTS",
        TerraformCloud => "TERRAFORMCLOUD",
        Zendesk => "ZENDESK",
        Auvik => "AUVIK",
        Sensu => "SENSU",
        NCentral => "NCENTRAL",
        JumpCloud => "JUMPCLOUD",
        Salesforce => "SALESFORCE",
        GuardDuty => "GUARDDUTY",
        StatusHub => "STATUSHUB",
        Ixon => "IXON",
        ApiFortress => "APIFORTRESS",
        FreshService => "FRESHSERVICE",
        AppSignal => "APPSIGNAL",
        Lightstep => "LIGHTSTEP",
        IbmCloudFunctions => "IBMCLOUDFUNCTIONS",
        CrowdStrike => "CROWDSTRIKE",
        Humio => "HUMIO",
        OhDear => "OHDEAR",
        MongoDbAtlas => "MONGODBATLAS",
        UptimeMonitor => "UPTIMEMONITOR",
    }
}

api_enum! {
    /// How incoming events are turned into alerts
    pub enum AlertCreation {
        OneAlertPerEmail => "ONE_ALERT_PER_EMAIL",
        OneAlertPerEmailSubject => "ONE_ALERT_PER_EMAIL_SUBJECT",
        OnePendingAlertAllowed => "ONE_PENDING_ALERT_ALLOWED",
        OneOpenAlertAllowed => "ONE_OPEN_ALERT_ALLOWED",
        OpenResolveOnExtraction => "OPEN_RESOLVE_ON_EXTRACTION",
        OneAlertGroupedPerWindow => "ONE_ALERT_GROUPED_PER_WINDOW",
    }
}

api_enum! {
    /// Aggregated state of an alert source
    pub enum AlertSourceStatus {
        Pending => "PENDING",
        AllAccepted => "ALL_ACCEPTED",
        AllResolved => "ALL_RESOLVED",
        InMaintenance => "IN_MAINTENANCE",
        Disabled => "DISABLED",
    }
}

api_enum! {
    /// Priority assigned to new alerts
    pub enum AlertPriorityRule {
        High => "HIGH",
        Low => "LOW",
        HighDuringSupportHours => "HIGH_DURING_SUPPORT_HOURS",
        LowDuringSupportHours => "LOW_DURING_SUPPORT_HOURS",
    }
}

api_enum! {
    /// Email part an email predicate looks at
    pub enum EmailPredicateField {
        EmailFrom => "EMAIL_FROM",
        EmailSubject => "EMAIL_SUBJECT",
        EmailBody => "EMAIL_BODY",
    }
}

api_enum! {
    pub enum EmailPredicateCriteria {
        ContainsAnyWords => "CONTAINS_ANY_WORDS",
        ContainsNotWords => "CONTAINS_NOT_WORDS",
        ContainsString => "CONTAINS_STRING",
        ContainsNotString => "CONTAINS_NOT_STRING",
        IsString => "IS_STRING",
        IsNotString => "IS_NOT_STRING",
        MatchesRegex => "MATCHES_REGEX",
        MatchesNotRegex => "MATCHES_NOT_REGEX",
    }
}

api_enum! {
    /// How several email predicates are combined
    pub enum FilterOperator {
        And => "AND",
        Or => "OR",
    }
}

api_enum! {
    /// Optional fields returned only when requested
    pub enum AlertSourceInclude {
        SummaryTemplate => "summaryTemplate",
        DetailsTemplate => "detailsTemplate",
        RoutingTemplate => "routingTemplate",
        TextTemplate => "textTemplate",
        LinkTemplates => "linkTemplates",
        PriorityTemplate => "priorityTemplate",
        EventFilter => "eventFilter",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_icon_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_icon_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_policy: Option<EscalationPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_type: Option<AlertSourceIntegrationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_url: Option<String>,

    /// ISO-8601 duration, e.g. `PT4H`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_resolution_timeout: Option<String>,

    /// ISO-8601 duration used with [`AlertCreation::OneAlertGroupedPerWindow`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_grouping_window: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_creation: Option<AlertCreation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertSourceStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_priority_rule: Option<AlertPriorityRule>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_hours: Option<SupportHour>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidirectional: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_filtered: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_resolve_filtered: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_operator: Option<FilterOperator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_filter_operator: Option<FilterOperator>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email_predicates: Vec<EmailPredicate>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email_resolve_predicates: Vec<EmailPredicate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_template: Option<Template>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_template: Option<Template>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_template: Option<Template>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub link_templates: Vec<LinkTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_template: Option<PriorityTemplate>,

    /// Filter expression applied to incoming events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailPredicate {
    pub field: Option<EmailPredicateField>,
    pub criteria: Option<EmailPredicateCriteria>,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Template {
    pub text_template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkTemplate {
    pub text: String,
    pub href_template: Template,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriorityTemplate {
    pub value_template: Template,
    pub mappings: Vec<PriorityMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriorityMapping {
    pub value: String,
    pub priority: Option<AlertPriority>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAlertSourceInput {
    pub alert_source: Option<AlertSource>,
}

#[derive(Debug, Clone)]
pub struct CreateAlertSourceOutput {
    pub alert_source: AlertSource,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertSourcesInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub include: Vec<AlertSourceInclude>,
}

#[derive(Debug, Clone)]
pub struct GetAlertSourcesOutput {
    pub alert_sources: Vec<AlertSource>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertSourceInput {
    pub alert_source_id: Option<i64>,
    pub include: Vec<AlertSourceInclude>,
}

#[derive(Debug, Clone)]
pub struct GetAlertSourceOutput {
    pub alert_source: AlertSource,
}

#[derive(Debug, Clone, Default)]
pub struct SearchAlertSourceInput {
    pub alert_source_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchAlertSourceOutput {
    pub alert_source: AlertSource,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAlertSourceInput {
    pub alert_source_id: Option<i64>,
    pub alert_source: Option<AlertSource>,
}

#[derive(Debug, Clone)]
pub struct UpdateAlertSourceOutput {
    pub alert_source: AlertSource,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteAlertSourceInput {
    pub alert_source_id: Option<i64>,
}

impl IlertClient {
    /// Create an alert source
    pub async fn create_alert_source(
        &self,
        input: &CreateAlertSourceInput,
    ) -> Result<CreateAlertSourceOutput> {
        let alert_source = required(input.alert_source.as_ref(), "alert source")?;
        let url = self.url(&[&routes::ALERT_SOURCES])?;
        let alert_source = self.post_json(url, alert_source).await?;
        Ok(CreateAlertSourceOutput { alert_source })
    }

    /// List alert sources
    pub async fn get_alert_sources(
        &self,
        input: &GetAlertSourcesInput,
    ) -> Result<GetAlertSourcesOutput> {
        let url = self.url(&[&routes::ALERT_SOURCES])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .each("include", &input.include);
        let alert_sources = self.get_json(url, &query).await?;
        Ok(GetAlertSourcesOutput { alert_sources })
    }

    /// Get an alert source by id
    pub async fn get_alert_source(
        &self,
        input: &GetAlertSourceInput,
    ) -> Result<GetAlertSourceOutput> {
        let id = required(input.alert_source_id, "alert source id")?;
        let url = self.url(&[&routes::ALERT_SOURCES, &id])?;
        let query = Query::new().each("include", &input.include);
        let alert_source = self.get_json(url, &query).await?;
        Ok(GetAlertSourceOutput { alert_source })
    }

    /// Find an alert source by exact name
    pub async fn search_alert_source(
        &self,
        input: &SearchAlertSourceInput,
    ) -> Result<SearchAlertSourceOutput> {
        let name = required(input.alert_source_name.as_deref(), "alert source name")?;
        let url = self.url(&[&routes::ALERT_SOURCES, &routes::NAME, &name])?;
        let alert_source = self.get_json(url, &Query::new()).await?;
        Ok(SearchAlertSourceOutput { alert_source })
    }

    /// Update an alert source
    pub async fn update_alert_source(
        &self,
        input: &UpdateAlertSourceInput,
    ) -> Result<UpdateAlertSourceOutput> {
        let id = required(input.alert_source_id, "alert source id")?;
        let alert_source = required(input.alert_source.as_ref(), "alert source")?;
        let url = self.url(&[&routes::ALERT_SOURCES, &id])?;
        let alert_source = self.put_json(url, alert_source).await?;
        Ok(UpdateAlertSourceOutput { alert_source })
    }

    /// Delete an alert source
    pub async fn delete_alert_source(&self, input: &DeleteAlertSourceInput) -> Result<()> {
        let id = required(input.alert_source_id, "alert source id")?;
        let url = self.url(&[&routes::ALERT_SOURCES, &id])?;
        self.delete_resource(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use crate::errors::IlertError;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_delete_alert_source_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/alert-sources/7"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": 404,
                "code": "NOT_FOUND",
                "message": "no such alert source"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let err = client
            .delete_alert_source(&DeleteAlertSourceInput {
                alert_source_id: Some(7),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "NOT_FOUND: no such alert source");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_alert_source() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/alert-sources/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let result = client
            .delete_alert_source(&DeleteAlertSourceInput {
                alert_source_id: Some(7),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_alert_source() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/alert-sources"))
            .and(body_partial_json(json!({
                "name": "Grafana prod",
                "integrationType": "GRAFANA",
                "escalationPolicy": {"id": 12},
                "alertCreation": "ONE_ALERT_PER_EMAIL"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 31,
                "name": "Grafana prod",
                "integrationType": "GRAFANA",
                "integrationKey": "il1api123",
                "escalationPolicy": {"id": 12, "name": "Default"},
                "alertCreation": "ONE_ALERT_PER_EMAIL",
                "status": "ALL_RESOLVED",
                "teams": [{"id": 2, "name": "SRE"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_alert_source(&CreateAlertSourceInput {
                alert_source: Some(AlertSource {
                    name: "Grafana prod".to_string(),
                    integration_type: Some(AlertSourceIntegrationType::Grafana),
                    escalation_policy: Some(EscalationPolicy {
                        id: Some(12),
                        ..Default::default()
                    }),
                    alert_creation: Some(AlertCreation::OneAlertPerEmail),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        let source = output.alert_source;
        assert_eq!(source.id, Some(31));
        assert_eq!(source.integration_key.as_deref(), Some("il1api123"));
        assert_eq!(source.status, Some(AlertSourceStatus::AllResolved));
        assert_eq!(source.teams, vec![TeamRef { id: 2, name: Some("SRE".to_string()) }]);
    }

    #[tokio::test]
    async fn test_get_alert_source_with_include() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/alert-sources/31"))
            .and(query_param("include", "summaryTemplate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 31,
                "name": "Grafana prod",
                "summaryTemplate": {"textTemplate": "{{ alert.title }}"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_alert_source(&GetAlertSourceInput {
                alert_source_id: Some(31),
                include: vec![AlertSourceInclude::SummaryTemplate],
            })
            .await
            .unwrap();

        assert_eq!(
            output.alert_source.summary_template.unwrap().text_template,
            "{{ alert.title }}"
        );
    }

    #[tokio::test]
    async fn test_get_alert_sources_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/alert-sources"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_alert_sources(&GetAlertSourcesInput::default())
            .await
            .unwrap();
        assert!(output.alert_sources.is_empty());
    }

    #[tokio::test]
    async fn test_create_alert_source_requires_body() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .create_alert_source(&CreateAlertSourceInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, IlertError::MissingField("alert source")));
    }

    #[test]
    fn test_alert_source_round_trip() {
        let source = AlertSource {
            id: Some(1),
            name: "mail".to_string(),
            integration_type: Some(AlertSourceIntegrationType::Email),
            active: Some(false),
            email_filtered: Some(true),
            filter_operator: Some(FilterOperator::Or),
            email_predicates: vec![EmailPredicate {
                field: Some(EmailPredicateField::EmailSubject),
                criteria: Some(EmailPredicateCriteria::ContainsString),
                value: "CRITICAL".to_string(),
            }],
            priority_template: Some(PriorityTemplate {
                value_template: Template {
                    text_template: "{{ severity }}".to_string(),
                },
                mappings: vec![PriorityMapping {
                    value: "p1".to_string(),
                    priority: Some(AlertPriority::High),
                }],
            }),
            ..Default::default()
        };

        let json = serde_json::to_string(&source).unwrap();
        let back: AlertSource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, source);
    }
}
