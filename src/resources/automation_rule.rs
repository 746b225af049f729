//! Automation rules change a service's status or open an incident when an
//! alert is created or accepted. Superseded by alert actions, kept for
//! accounts that still use them.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::alert_source::AlertSource;
use crate::resources::incident_template::IncidentTemplate;
use crate::resources::service::{Service, ServiceStatus};

api_enum! {
    /// Alert event a rule reacts to
    pub enum AutomationRuleAlertType {
        Created => "CREATED",
        Accepted => "ACCEPTED",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutomationRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<AutomationRuleAlertType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_incident: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_status: Option<ServiceStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<IncidentTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_source: Option<AlertSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notification: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAutomationRuleInput {
    pub automation_rule: Option<AutomationRule>,
}

#[derive(Debug, Clone)]
pub struct CreateAutomationRuleOutput {
    pub automation_rule: AutomationRule,
}

#[derive(Debug, Clone, Default)]
pub struct GetAutomationRulesInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub service: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetAutomationRulesOutput {
    pub automation_rules: Vec<AutomationRule>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAutomationRuleInput {
    pub automation_rule_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetAutomationRuleOutput {
    pub automation_rule: AutomationRule,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAutomationRuleInput {
    pub automation_rule_id: Option<String>,
    pub automation_rule: Option<AutomationRule>,
}

#[derive(Debug, Clone)]
pub struct UpdateAutomationRuleOutput {
    pub automation_rule: AutomationRule,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteAutomationRuleInput {
    pub automation_rule_id: Option<String>,
}

impl IlertClient {
    /// Create an automation rule
    pub async fn create_automation_rule(
        &self,
        input: &CreateAutomationRuleInput,
    ) -> Result<CreateAutomationRuleOutput> {
        let rule = required(input.automation_rule.as_ref(), "automation rule")?;
        let url = self.url(&[&routes::AUTOMATION_RULES])?;
        let automation_rule = self.post_json(url, rule).await?;
        Ok(CreateAutomationRuleOutput { automation_rule })
    }

    /// List automation rules
    pub async fn get_automation_rules(
        &self,
        input: &GetAutomationRulesInput,
    ) -> Result<GetAutomationRulesOutput> {
        let url = self.url(&[&routes::AUTOMATION_RULES])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .opt("service", input.service);
        let automation_rules = self.get_json(url, &query).await?;
        Ok(GetAutomationRulesOutput { automation_rules })
    }

    /// Get an automation rule by id
    pub async fn get_automation_rule(
        &self,
        input: &GetAutomationRuleInput,
    ) -> Result<GetAutomationRuleOutput> {
        let id = required(input.automation_rule_id.as_deref(), "automation rule id")?;
        let url = self.url(&[&routes::AUTOMATION_RULES, &id])?;
        let automation_rule = self.get_json(url, &Query::new()).await?;
        Ok(GetAutomationRuleOutput { automation_rule })
    }

    /// Update an automation rule
    pub async fn update_automation_rule(
        &self,
        input: &UpdateAutomationRuleInput,
    ) -> Result<UpdateAutomationRuleOutput> {
        let id = required(input.automation_rule_id.as_deref(), "automation rule id")?;
        let rule = required(input.automation_rule.as_ref(), "automation rule")?;
        let url = self.url(&[&routes::AUTOMATION_RULES, &id])?;
        let automation_rule = self.put_json(url, rule).await?;
        Ok(UpdateAutomationRuleOutput { automation_rule })
    }

    /// Delete an automation rule
    pub async fn delete_automation_rule(&self, input: &DeleteAutomationRuleInput) -> Result<()> {
        let id = required(input.automation_rule_id.as_deref(), "automation rule id")?;
        let url = self.url(&[&routes::AUTOMATION_RULES, &id])?;
        self.delete_resource(url).await
    }
}
