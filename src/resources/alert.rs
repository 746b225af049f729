//! Alerts raised by alert sources, and the actions taken on them.

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::{decode, routes, IlertClient, Query};
use crate::errors::{required, IlertError, Result};
use crate::resources::alert_source::AlertSource;
use crate::resources::escalation_policy::{EscalationPolicy, EscalationRule};
use crate::resources::user::User;
use crate::resources::user_preference::NotificationMethod;
use crate::types::{Image, Link};

api_enum! {
    /// Lifecycle state of an alert
    pub enum AlertStatus {
        New => "NEW",
        Accepted => "ACCEPTED",
        Resolved => "RESOLVED",
    }
}

api_enum! {
    pub enum AlertPriority {
        High => "HIGH",
        Low => "LOW",
    }
}

api_enum! {
    /// Optional fields returned only when requested
    pub enum AlertInclude {
        EscalationRules => "escalationRules",
        NextEscalationUser => "nextEscalationUser",
    }
}

api_enum! {
    pub enum AlertResponderStatus {
        Pending => "PENDING",
        Accepted => "ACCEPTED",
    }
}

api_enum! {
    pub enum AlertNotificationStatus {
        Scheduled => "SCHEDULED",
        Success => "SUCCESS",
        Error => "ERROR",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,

    pub summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_source: Option<AlertSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_policy: Option<EscalationPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<AlertPriority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_key: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub escalation_rules: Vec<EscalationRule>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_escalation: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_escalation_user: Option<User>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responders: Vec<AlertResponder>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertResponder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertResponderStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
}

/// Entry of an alert's audit log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertLogEntry {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_entry_type: Option<String>,

    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<i64>,
}

/// Notification sent to a responder about an alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertNotification {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<NotificationMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertNotificationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Action that can be run on an alert, or the request to run one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertActionInvocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_action_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<String>,

    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<AlertActionResult>,
}

/// Outcome of running an action on an alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertActionResult {
    pub id: String,

    pub alert_id: i64,

    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertsInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub include: Vec<AlertInclude>,
    pub states: Vec<AlertStatus>,
    pub alert_sources: Vec<i64>,
    pub assigned_to_user_ids: Vec<i64>,
    pub escalation_policies: Vec<i64>,
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct GetAlertsOutput {
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertsCountInput {
    pub states: Vec<AlertStatus>,
    pub alert_sources: Vec<i64>,
    pub assigned_to_user_ids: Vec<i64>,
    pub escalation_policies: Vec<i64>,
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct GetAlertsCountOutput {
    pub count: i64,
}

#[derive(Debug, Deserialize)]
struct AlertCount {
    count: i64,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertInput {
    pub alert_id: Option<i64>,
    pub include: Vec<AlertInclude>,
}

#[derive(Debug, Clone)]
pub struct GetAlertOutput {
    pub alert: Alert,
}

/// Input shared by the state transitions that only need the alert id
#[derive(Debug, Clone, Default)]
pub struct AlertIdInput {
    pub alert_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct AlertOutput {
    pub alert: Alert,
}

/// Assign an alert to exactly one of a user, an escalation policy or a schedule
#[derive(Debug, Clone, Default)]
pub struct AssignAlertInput {
    pub alert_id: Option<i64>,
    pub user_id: Option<i64>,
    pub escalation_policy_id: Option<i64>,
    pub schedule_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertLogEntriesInput {
    pub alert_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetAlertLogEntriesOutput {
    pub log_entries: Vec<AlertLogEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertNotificationsInput {
    pub alert_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetAlertNotificationsOutput {
    pub notifications: Vec<AlertNotification>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAlertActionResultsInput {
    pub alert_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetAlertActionResultsOutput {
    pub actions: Vec<AlertActionInvocation>,
}

#[derive(Debug, Clone, Default)]
pub struct InvokeAlertActionInput {
    pub alert_id: Option<i64>,
    pub action: Option<AlertActionInvocation>,
}

#[derive(Debug, Clone)]
pub struct InvokeAlertActionOutput {
    pub result: AlertActionResult,
}

fn alert_filters(
    query: Query,
    states: &[AlertStatus],
    alert_sources: &[i64],
    assigned_to_user_ids: &[i64],
    escalation_policies: &[i64],
    from: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
) -> Query {
    query
        .each("states", states)
        .each("alert-sources", alert_sources)
        .each("assigned-to", assigned_to_user_ids)
        .each("policies", escalation_policies)
        .date("from", from)
        .date("until", until)
}

impl IlertClient {
    /// List alerts matching the given filters
    pub async fn get_alerts(&self, input: &GetAlertsInput) -> Result<GetAlertsOutput> {
        let url = self.url(&[&routes::ALERTS])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .each("include", &input.include);
        let query = alert_filters(
            query,
            &input.states,
            &input.alert_sources,
            &input.assigned_to_user_ids,
            &input.escalation_policies,
            input.from,
            input.until,
        );
        let alerts = self.get_json(url, &query).await?;
        Ok(GetAlertsOutput { alerts })
    }

    /// Count alerts matching the given filters
    pub async fn get_alerts_count(
        &self,
        input: &GetAlertsCountInput,
    ) -> Result<GetAlertsCountOutput> {
        let url = self.url(&[&routes::ALERTS, &"count"])?;
        let query = alert_filters(
            Query::new(),
            &input.states,
            &input.alert_sources,
            &input.assigned_to_user_ids,
            &input.escalation_policies,
            input.from,
            input.until,
        );
        let AlertCount { count } = self.get_json(url, &query).await?;
        Ok(GetAlertsCountOutput { count })
    }

    /// Get an alert by id
    pub async fn get_alert(&self, input: &GetAlertInput) -> Result<GetAlertOutput> {
        let alert_id = required(input.alert_id, "alert id")?;
        let url = self.url(&[&routes::ALERTS, &alert_id])?;
        let query = Query::new().each("include", &input.include);
        let alert = self.get_json(url, &query).await?;
        Ok(GetAlertOutput { alert })
    }

    /// Accept an alert as the authenticated user
    pub async fn accept_alert(&self, input: &AlertIdInput) -> Result<AlertOutput> {
        self.transition_alert(input, "accept").await
    }

    /// Resolve an alert
    pub async fn resolve_alert(&self, input: &AlertIdInput) -> Result<AlertOutput> {
        self.transition_alert(input, "resolve").await
    }

    /// Escalate an alert to the next escalation level
    pub async fn escalate_alert(&self, input: &AlertIdInput) -> Result<AlertOutput> {
        self.transition_alert(input, "escalate").await
    }

    async fn transition_alert(&self, input: &AlertIdInput, action: &str) -> Result<AlertOutput> {
        let alert_id = required(input.alert_id, "alert id")?;
        let url = self.url(&[&routes::ALERTS, &alert_id, &action])?;
        self.put_alert(url, Query::new()).await
    }

    /// Assign an alert to a user, an escalation policy or a schedule
    pub async fn assign_alert(&self, input: &AssignAlertInput) -> Result<AlertOutput> {
        let alert_id = required(input.alert_id, "alert id")?;
        if input.user_id.is_none()
            && input.escalation_policy_id.is_none()
            && input.schedule_id.is_none()
        {
            return Err(IlertError::MissingField(
                "user id, escalation policy id or schedule id",
            ));
        }
        let url = self.url(&[&routes::ALERTS, &alert_id, &"assign"])?;
        let query = Query::new()
            .opt("user-id", input.user_id)
            .opt("policy-id", input.escalation_policy_id)
            .opt("schedule-id", input.schedule_id);
        self.put_alert(url, query).await
    }

    async fn put_alert(&self, url: Url, query: Query) -> Result<AlertOutput> {
        let response = self
            .send_empty(Method::PUT, url, &query, &[StatusCode::OK])
            .await?;
        let alert = decode(response).await?;
        Ok(AlertOutput { alert })
    }

    /// Get the audit log of an alert
    pub async fn get_alert_log_entries(
        &self,
        input: &GetAlertLogEntriesInput,
    ) -> Result<GetAlertLogEntriesOutput> {
        let alert_id = required(input.alert_id, "alert id")?;
        let url = self.url(&[&routes::ALERTS, &alert_id, &"log-entries"])?;
        let log_entries = self.get_json(url, &Query::new()).await?;
        Ok(GetAlertLogEntriesOutput { log_entries })
    }

    /// Get notifications sent for an alert
    pub async fn get_alert_notifications(
        &self,
        input: &GetAlertNotificationsInput,
    ) -> Result<GetAlertNotificationsOutput> {
        let alert_id = required(input.alert_id, "alert id")?;
        let url = self.url(&[&routes::ALERTS, &alert_id, &"notifications"])?;
        let notifications = self.get_json(url, &Query::new()).await?;
        Ok(GetAlertNotificationsOutput { notifications })
    }

    /// Get the actions available on an alert with their run history
    pub async fn get_alert_action_results(
        &self,
        input: &GetAlertActionResultsInput,
    ) -> Result<GetAlertActionResultsOutput> {
        let alert_id = required(input.alert_id, "alert id")?;
        let url = self.url(&[&routes::ALERTS, &alert_id, &"actions"])?;
        let actions = self.get_json(url, &Query::new()).await?;
        Ok(GetAlertActionResultsOutput { actions })
    }

    /// Run an action on an alert
    pub async fn invoke_alert_action(
        &self,
        input: &InvokeAlertActionInput,
    ) -> Result<InvokeAlertActionOutput> {
        let alert_id = required(input.alert_id, "alert id")?;
        let action = required(input.action.as_ref(), "alert action")?;
        let url = self.url(&[&routes::ALERTS, &alert_id, &"actions"])?;
        let result = self.post_json(url, action).await?;
        Ok(InvokeAlertActionOutput { result })
    }
}
