//! Escalation policies: who gets notified, and when, while an alert is open.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::schedule::Schedule;
use crate::resources::user::User;
use crate::types::TeamRef;

/// An ordered list of escalation rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EscalationPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    pub escalation_rules: Vec<EscalationRule>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeating: Option<bool>,

    /// How often the policy repeats, when `repeating` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_min: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_key: Option<String>,
}

/// One step of an escalation policy
///
/// The legacy single `user`/`schedule` fields and the `users`/`schedules`
/// lists may both be present in responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EscalationRule {
    /// Minutes to wait before escalating to the next rule
    pub escalation_timeout: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedules: Vec<Schedule>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateEscalationPolicyInput {
    pub escalation_policy: Option<EscalationPolicy>,
}

#[derive(Debug, Clone)]
pub struct CreateEscalationPolicyOutput {
    pub escalation_policy: EscalationPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct GetEscalationPoliciesInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetEscalationPoliciesOutput {
    pub escalation_policies: Vec<EscalationPolicy>,
}

#[derive(Debug, Clone, Default)]
pub struct GetEscalationPolicyInput {
    pub escalation_policy_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetEscalationPolicyOutput {
    pub escalation_policy: EscalationPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct SearchEscalationPolicyInput {
    pub escalation_policy_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchEscalationPolicyOutput {
    pub escalation_policy: EscalationPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEscalationPolicyInput {
    pub escalation_policy_id: Option<i64>,
    pub escalation_policy: Option<EscalationPolicy>,
}

#[derive(Debug, Clone)]
pub struct UpdateEscalationPolicyOutput {
    pub escalation_policy: EscalationPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteEscalationPolicyInput {
    pub escalation_policy_id: Option<i64>,
}

impl IlertClient {
    /// Create an escalation policy
    pub async fn create_escalation_policy(
        &self,
        input: &CreateEscalationPolicyInput,
    ) -> Result<CreateEscalationPolicyOutput> {
        let policy = required(input.escalation_policy.as_ref(), "escalation policy")?;
        let url = self.url(&[&routes::ESCALATION_POLICIES])?;
        let escalation_policy = self.post_json(url, policy).await?;
        Ok(CreateEscalationPolicyOutput { escalation_policy })
    }

    /// List escalation policies
    pub async fn get_escalation_policies(
        &self,
        input: &GetEscalationPoliciesInput,
    ) -> Result<GetEscalationPoliciesOutput> {
        let url = self.url(&[&routes::ESCALATION_POLICIES])?;
        let query = Query::new().paging(input.start_index, input.max_results);
        let escalation_policies = self.get_json(url, &query).await?;
        Ok(GetEscalationPoliciesOutput {
            escalation_policies,
        })
    }

    /// Get an escalation policy by id
    pub async fn get_escalation_policy(
        &self,
        input: &GetEscalationPolicyInput,
    ) -> Result<GetEscalationPolicyOutput> {
        let id = required(input.escalation_policy_id, "escalation policy id")?;
        let url = self.url(&[&routes::ESCALATION_POLICIES, &id])?;
        let escalation_policy = self.get_json(url, &Query::new()).await?;
        Ok(GetEscalationPolicyOutput { escalation_policy })
    }

    /// Find an escalation policy by its exact name
    pub async fn search_escalation_policy(
        &self,
        input: &SearchEscalationPolicyInput,
    ) -> Result<SearchEscalationPolicyOutput> {
        let name = required(
            input.escalation_policy_name.as_deref(),
            "escalation policy name",
        )?;
        let url = self.url(&[&routes::ESCALATION_POLICIES, &routes::NAME, &name])?;
        let escalation_policy = self.get_json(url, &Query::new()).await?;
        Ok(SearchEscalationPolicyOutput { escalation_policy })
    }

    /// Update an escalation policy
    pub async fn update_escalation_policy(
        &self,
        input: &UpdateEscalationPolicyInput,
    ) -> Result<UpdateEscalationPolicyOutput> {
        let id = required(input.escalation_policy_id, "escalation policy id")?;
        let policy = required(input.escalation_policy.as_ref(), "escalation policy")?;
        let url = self.url(&[&routes::ESCALATION_POLICIES, &id])?;
        let escalation_policy = self.put_json(url, policy).await?;
        Ok(UpdateEscalationPolicyOutput { escalation_policy })
    }

    /// Delete an escalation policy
    pub async fn delete_escalation_policy(&self, input: &DeleteEscalationPolicyInput) -> Result<()> {
        let id = required(input.escalation_policy_id, "escalation policy id")?;
        let url = self.url(&[&routes::ESCALATION_POLICIES, &id])?;
        self.delete_resource(url).await
    }
}
