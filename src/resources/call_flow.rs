//! Call flows route inbound phone calls through a tree of nodes.
//!
//! A flow starts at its root node. Every node has branches, and each branch
//! may point at the next node, so the whole flow is one recursive value.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::number::Number;
use crate::resources::user::UserLanguage;
use crate::types::TeamRef;

api_enum! {
    pub enum CallFlowNodeType {
        Root => "ROOT",
        IvrMenu => "IVR_MENU",
        AudioMessage => "AUDIO_MESSAGE",
        SupportHours => "SUPPORT_HOURS",
        RouteCall => "ROUTE_CALL",
        Voicemail => "VOICEMAIL",
        PinCode => "PIN_CODE",
        CreateAlert => "CREATE_ALERT",
        Plain => "PLAIN",
        BlockNumbers => "BLOCK_NUMBERS",
        AgenticVoiceAgent => "AGENTIC",
    }
}

api_enum! {
    pub enum CallFlowBranchType {
        Branch => "BRANCH",
        CatchAll => "CATCH_ALL",
        Answered => "ANSWERED",
    }
}

api_enum! {
    /// How a `ROUTE_CALL` node dials its targets
    pub enum CallStyle {
        Ordered => "ORDERED",
        Random => "RANDOM",
        Parallel => "PARALLEL",
    }
}

api_enum! {
    pub enum CallTargetType {
        User => "USER",
        OnCallSchedule => "ON_CALL_SCHEDULE",
        NumberTarget => "NUMBER",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_number: Option<Number>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<UserLanguage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_node: Option<CallFlowNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallFlowNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<CallFlowNodeType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CallFlowNodeMetadata>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<CallFlowBranch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallFlowBranch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_type: Option<CallFlowBranchType>,

    /// Digit or expression the branch matches, e.g. `"1"` in an IVR menu
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Box<CallFlowNode>>,
}

/// Node settings; which fields apply depends on the node type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallFlowNodeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_audio_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_voice_model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<UserLanguage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_name: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<CallFlowPinCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_hours_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_audio_url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<CallTarget>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_style: Option<CallStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_source_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_timeout_sec: Option<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blacklist: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallFlowPinCode {
    pub code: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallTarget {
    pub target: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub target_type: Option<CallTargetType>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateCallFlowInput {
    pub call_flow: Option<CallFlow>,
}

#[derive(Debug, Clone)]
pub struct CreateCallFlowOutput {
    pub call_flow: CallFlow,
}

#[derive(Debug, Clone, Default)]
pub struct GetCallFlowsInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetCallFlowsOutput {
    pub call_flows: Vec<CallFlow>,
}

#[derive(Debug, Clone, Default)]
pub struct GetCallFlowInput {
    pub call_flow_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetCallFlowOutput {
    pub call_flow: CallFlow,
}

#[derive(Debug, Clone, Default)]
pub struct SearchCallFlowInput {
    pub call_flow_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchCallFlowOutput {
    pub call_flow: CallFlow,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCallFlowInput {
    pub call_flow_id: Option<i64>,
    pub call_flow: Option<CallFlow>,
}

#[derive(Debug, Clone)]
pub struct UpdateCallFlowOutput {
    pub call_flow: CallFlow,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteCallFlowInput {
    pub call_flow_id: Option<i64>,
}

impl IlertClient {
    /// Create a call flow
    pub async fn create_call_flow(
        &self,
        input: &CreateCallFlowInput,
    ) -> Result<CreateCallFlowOutput> {
        let call_flow = required(input.call_flow.as_ref(), "call flow")?;
        let url = self.url(&[&routes::CALL_FLOWS])?;
        let call_flow = self.post_json(url, call_flow).await?;
        Ok(CreateCallFlowOutput { call_flow })
    }

    /// List call flows
    pub async fn get_call_flows(&self, input: &GetCallFlowsInput) -> Result<GetCallFlowsOutput> {
        let url = self.url(&[&routes::CALL_FLOWS])?;
        let query = Query::new().paging(input.start_index, input.max_results);
        let call_flows = self.get_json(url, &query).await?;
        Ok(GetCallFlowsOutput { call_flows })
    }

    /// Get a call flow by id
    pub async fn get_call_flow(&self, input: &GetCallFlowInput) -> Result<GetCallFlowOutput> {
        let id = required(input.call_flow_id, "call flow id")?;
        let url = self.url(&[&routes::CALL_FLOWS, &id])?;
        let call_flow = self.get_json(url, &Query::new()).await?;
        Ok(GetCallFlowOutput { call_flow })
    }

    /// Find a call flow by exact name
    pub async fn search_call_flow(
        &self,
        input: &SearchCallFlowInput,
    ) -> Result<SearchCallFlowOutput> {
        let name = required(input.call_flow_name.as_deref(), "call flow name")?;
        let url = self.url(&[&routes::CALL_FLOWS, &routes::NAME, &name])?;
        let call_flow = self.get_json(url, &Query::new()).await?;
        Ok(SearchCallFlowOutput { call_flow })
    }

    /// Update a call flow
    pub async fn update_call_flow(
        &self,
        input: &UpdateCallFlowInput,
    ) -> Result<UpdateCallFlowOutput> {
        let id = required(input.call_flow_id, "call flow id")?;
        let call_flow = required(input.call_flow.as_ref(), "call flow")?;
        let url = self.url(&[&routes::CALL_FLOWS, &id])?;
        let call_flow = self.put_json(url, call_flow).await?;
        Ok(UpdateCallFlowOutput { call_flow })
    }

    /// Delete a call flow
    pub async fn delete_call_flow(&self, input: &DeleteCallFlowInput) -> Result<()> {
        let id = required(input.call_flow_id, "call flow id")?;
        let url = self.url(&[&routes::CALL_FLOWS, &id])?;
        self.delete_resource(url).await
    }
}
