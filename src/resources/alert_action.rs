//! Alert actions run a connector when alert events match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::provider::ProviderParams;
use crate::resources::alert_source::AlertSource;
use crate::types::TeamRef;

api_enum! {
    pub enum AlertActionTriggerMode {
        Automatic => "AUTOMATIC",
        Manual => "MANUAL",
    }
}

api_enum! {
    /// Alert events that can trigger an action
    pub enum AlertActionTriggerType {
        AlertCreated => "alert-created",
        AlertAssigned => "alert-assigned",
        AlertAutoEscalated => "alert-auto-escalated",
        AlertAcknowledged => "alert-acknowledged",
        AlertRaised => "alert-raised",
        AlertCommentAdded => "alert-comment-added",
        AlertEscalationEnded => "alert-escalation-ended",
        AlertResolved => "alert-resolved",
        AlertAutoResolved => "alert-auto-resolved",
        AlertResponderAdded => "alert-responder-added",
        AlertResponderRemoved => "alert-responder-removed",
        AlertChannelAttached => "alert-channel-attached",
        AlertChannelDetached => "alert-channel-detached",
        AlertNotResolved => "v-alert-not-resolved",
    }
}

api_enum! {
    pub enum AlertFilterOperator {
        And => "AND",
        Or => "OR",
    }
}

api_enum! {
    pub enum AlertFilterPredicateField {
        AlertSummary => "ALERT_SUMMARY",
        AlertDetails => "ALERT_DETAILS",
        EscalationPolicy => "ESCALATION_POLICY",
        AlertPriority => "ALERT_PRIORITY",
    }
}

api_enum! {
    pub enum AlertFilterPredicateCriteria {
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub alert_sources: Vec<AlertSource>,

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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_sec: Option<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trigger_types: Vec<AlertActionTriggerType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_filter: Option<AlertFilter>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_ended_delay_sec: Option<i64>,

    /// Only used with the `v-alert-not-resolved` trigger
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_resolved_delay_sec: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<AlertFilterOperator>,

    pub predicates: Vec<AlertFilterPredicate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertFilterPredicate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<AlertFilterPredicateField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<AlertFilterPredicateCriteria>,

    pub value: String,
}

/// Provider of an alert action together with its per-action settings
///
/// Keyed by `connectorType` on the owning record, with settings in `params`.
/// The API may omit `params`, hence the `Option` in every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "connectorType", content = "params", rename_all = "snake_case")]
pub enum AlertActionParams {
    Datadog(Option<DatadogActionParams>),
    Jira(Option<JiraActionParams>),
    MicrosoftTeams(Option<WebhookActionParams>),
    MicrosoftTeamsBot(Option<TeamsBotActionParams>),
    #[serde(rename = "servicenow")]
    ServiceNow(Option<ServiceNowActionParams>),
    Slack(Option<SlackActionParams>),
    Webhook(Option<WebhookActionParams>),
    Zendesk(Option<ZendeskActionParams>),
    Discord(Option<WebhookActionParams>),
    Github(Option<GithubActionParams>),
    Topdesk(Option<TopdeskActionParams>),
    AwsLambda(Option<WebhookActionParams>),
    #[serde(rename = "azure_faas")]
    AzureFunction(Option<WebhookActionParams>),
    #[serde(rename = "google_faas")]
    GoogleFunction(Option<WebhookActionParams>),
    Email(Option<EmailActionParams>),
    Sysdig(Option<SysdigActionParams>),
    Zapier(Option<WebhookActionParams>),
    Autotask(Option<AutotaskActionParams>),
    Zammad(Option<ZammadActionParams>),
    Mattermost(Option<WebhookActionParams>),
    #[serde(rename = "statuspageio")]
    StatusPageIo(Option<StatusPageIoActionParams>),
    DingtalkAction(Option<WebhookActionParams>),
    /// Provider not modelled by this crate, kept as sent
    #[serde(skip)]
    Other {
        provider: String,
        params: Option<Value>,
    },
}

impl ProviderParams for AlertActionParams {
    const TAG: &'static str = "connectorType";

    fn other(provider: String, params: Option<Value>) -> Self {
        AlertActionParams::Other { provider, params }
    }

    fn as_other(&self) -> Option<(&str, Option<&Value>)> {
        match self {
            AlertActionParams::Other { provider, params } => Some((provider, params.as_ref())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatadogActionParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JiraActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_template: Option<String>,
}

/// Settings of every provider that is called through a plain URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_template: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamsBotActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceNowActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlackActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZendeskActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GithubActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TopdeskActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailActionParams {
    pub recipients: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_template: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SysdigActionParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutotaskActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZammadActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusPageIoActionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAlertActionInput {
    pub alert_action: Option<AlertAction>,
}

#[derive(Debug, Clone)]
pub struct CreateAlertActionOutput {
    pub alert_action: AlertAction,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertActionsInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetAlertActionsOutput {
    pub alert_actions: Vec<AlertAction>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertActionInput {
    pub alert_action_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetAlertActionOutput {
    pub alert_action: AlertAction,
}

#[derive(Debug, Clone, Default)]
pub struct SearchAlertActionInput {
    pub alert_action_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchAlertActionOutput {
    pub alert_action: AlertAction,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAlertActionInput {
    pub alert_action_id: Option<String>,
    pub alert_action: Option<AlertAction>,
}

#[derive(Debug, Clone)]
pub struct UpdateAlertActionOutput {
    pub alert_action: AlertAction,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteAlertActionInput {
    pub alert_action_id: Option<String>,
}

impl IlertClient {
    /// Create an alert action
    pub async fn create_alert_action(
        &self,
        input: &CreateAlertActionInput,
    ) -> Result<CreateAlertActionOutput> {
        let alert_action = required(input.alert_action.as_ref(), "alert action")?;
        let url = self.url(&[&routes::ALERT_ACTIONS])?;
        let alert_action = self.post_json(url, alert_action).await?;
        Ok(CreateAlertActionOutput { alert_action })
    }

    /// List alert actions
    pub async fn get_alert_actions(
        &self,
        input: &GetAlertActionsInput,
    ) -> Result<GetAlertActionsOutput> {
        let url = self.url(&[&routes::ALERT_ACTIONS])?;
        let query = Query::new().paging(input.start_index, input.max_results);
        let alert_actions = self.get_json(url, &query).await?;
        Ok(GetAlertActionsOutput { alert_actions })
    }

    /// Get an alert action by id
    pub async fn get_alert_action(
        &self,
        input: &GetAlertActionInput,
    ) -> Result<GetAlertActionOutput> {
        let id = required(input.alert_action_id.as_deref(), "alert action id")?;
        let url = self.url(&[&routes::ALERT_ACTIONS, &id])?;
        let alert_action = self.get_json(url, &Query::new()).await?;
        Ok(GetAlertActionOutput { alert_action })
    }

    /// Find an alert action by exact name
    pub async fn search_alert_action(
        &self,
        input: &SearchAlertActionInput,
    ) -> Result<SearchAlertActionOutput> {
        let name = required(input.alert_action_name.as_deref(), "alert action name")?;
        let url = self.url(&[&routes::ALERT_ACTIONS, &routes::NAME, &name])?;
        let alert_action = self.get_json(url, &Query::new()).await?;
        Ok(SearchAlertActionOutput { alert_action })
    }

    /// Update an alert action
    pub async fn update_alert_action(
        &self,
        input: &UpdateAlertActionInput,
    ) -> Result<UpdateAlertActionOutput> {
        let id = required(input.alert_action_id.as_deref(), "alert action id")?;
        let alert_action = required(input.alert_action.as_ref(), "alert action")?;
        let url = self.url(&[&routes::ALERT_ACTIONS, &id])?;
        let alert_action = self.put_json(url, alert_action).await?;
        Ok(UpdateAlertActionOutput { alert_action })
    }

    /// Delete an alert action
    pub async fn delete_alert_action(&self, input: &DeleteAlertActionInput) -> Result<()> {
        let id = required(input.alert_action_id.as_deref(), "alert action id")?;
        let url = self.url(&[&routes::ALERT_ACTIONS, &id])?;
        self.delete_resource(url).await
    }
}
