//! Deployment pipelines turn CI/CD webhooks into deployment events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::provider::ProviderParams;
use crate::types::TeamRef;

api_enum! {
    pub enum DeploymentPipelineInclude {
        IntegrationUrl => "integrationUrl",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentPipeline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(
        flatten,
        with = "crate::provider",
        skip_serializing_if = "Option::is_none"
    )]
    pub params: Option<DeploymentPipelineParams>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_key: Option<String>,

    /// Webhook URL to configure in the CI system; only returned when included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// CI system of a pipeline together with its filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "integrationType", content = "params")]
pub enum DeploymentPipelineParams {
    #[serde(rename = "GITHUB")]
    GitHub(Option<GitHubPipelineParams>),
    #[serde(rename = "GITLAB")]
    GitLab(Option<GitLabPipelineParams>),
    /// CI system not modelled by this crate, kept as sent
    #[serde(skip)]
    Other {
        provider: String,
        params: Option<Value>,
    },
}

impl ProviderParams for DeploymentPipelineParams {
    const TAG: &'static str = "integrationType";

    fn other(provider: String, params: Option<Value>) -> Self {
        DeploymentPipelineParams::Other { provider, params }
    }

    fn as_other(&self) -> Option<(&str, Option<&Value>)> {
        match self {
            DeploymentPipelineParams::Other { provider, params } => {
                Some((provider, params.as_ref()))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubPipelineParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branch_filter: Vec<String>,

    /// GitHub event names, e.g. `release` or `push`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event_filter: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GitLabPipelineParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branch_filter: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment_filter: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateDeploymentPipelineInput {
    pub deployment_pipeline: Option<DeploymentPipeline>,
}

#[derive(Debug, Clone)]
pub struct CreateDeploymentPipelineOutput {
    pub deployment_pipeline: DeploymentPipeline,
}

#[derive(Debug, Clone, Default)]
pub struct GetDeploymentPipelinesInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub include: Vec<DeploymentPipelineInclude>,
}

#[derive(Debug, Clone)]
pub struct GetDeploymentPipelinesOutput {
    pub deployment_pipelines: Vec<DeploymentPipeline>,
}

#[derive(Debug, Clone, Default)]
pub struct GetDeploymentPipelineInput {
    pub deployment_pipeline_id: Option<i64>,
    pub include: Vec<DeploymentPipelineInclude>,
}

#[derive(Debug, Clone)]
pub struct GetDeploymentPipelineOutput {
    pub deployment_pipeline: DeploymentPipeline,
}

#[derive(Debug, Clone, Default)]
pub struct SearchDeploymentPipelineInput {
    pub deployment_pipeline_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchDeploymentPipelineOutput {
    pub deployment_pipeline: DeploymentPipeline,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDeploymentPipelineInput {
    pub deployment_pipeline_id: Option<i64>,
    pub deployment_pipeline: Option<DeploymentPipeline>,
}

#[derive(Debug, Clone)]
pub struct UpdateDeploymentPipelineOutput {
    pub deployment_pipeline: DeploymentPipeline,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteDeploymentPipelineInput {
    pub deployment_pipeline_id: Option<i64>,
}

impl IlertClient {
    /// Create a deployment pipeline
    pub async fn create_deployment_pipeline(
        &self,
        input: &CreateDeploymentPipelineInput,
    ) -> Result<CreateDeploymentPipelineOutput> {
        let pipeline = required(input.deployment_pipeline.as_ref(), "deployment pipeline")?;
        let url = self.url(&[&routes::DEPLOYMENT_PIPELINES])?;
        let deployment_pipeline = self.post_json(url, pipeline).await?;
        Ok(CreateDeploymentPipelineOutput {
            deployment_pipeline,
        })
    }

    /// List deployment pipelines
    pub async fn get_deployment_pipelines(
        &self,
        input: &GetDeploymentPipelinesInput,
    ) -> Result<GetDeploymentPipelinesOutput> {
        let url = self.url(&[&routes::DEPLOYMENT_PIPELINES])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .each("include", &input.include);
        let deployment_pipelines = self.get_json(url, &query).await?;
        Ok(GetDeploymentPipelinesOutput {
            deployment_pipelines,
        })
    }

    /// Get a deployment pipeline by id
    pub async fn get_deployment_pipeline(
        &self,
        input: &GetDeploymentPipelineInput,
    ) -> Result<GetDeploymentPipelineOutput> {
        let id = required(input.deployment_pipeline_id, "deployment pipeline id")?;
        let url = self.url(&[&routes::DEPLOYMENT_PIPELINES, &id])?;
        let query = Query::new().each("include", &input.include);
        let deployment_pipeline = self.get_json(url, &query).await?;
        Ok(GetDeploymentPipelineOutput {
            deployment_pipeline,
        })
    }

    /// Find a deployment pipeline by exact name
    pub async fn search_deployment_pipeline(
        &self,
        input: &SearchDeploymentPipelineInput,
    ) -> Result<SearchDeploymentPipelineOutput> {
        let name = required(
            input.deployment_pipeline_name.as_deref(),
            "deployment pipeline name",
        )?;
        let url = self.url(&[&routes::DEPLOYMENT_PIPELINES, &routes::NAME, &name])?;
        let deployment_pipeline = self.get_json(url, &Query::new()).await?;
        Ok(SearchDeploymentPipelineOutput {
            deployment_pipeline,
        })
    }

    /// Update a deployment pipeline
    pub async fn update_deployment_pipeline(
        &self,
        input: &UpdateDeploymentPipelineInput,
    ) -> Result<UpdateDeploymentPipelineOutput> {
        let id = required(input.deployment_pipeline_id, "deployment pipeline id")?;
        let pipeline = required(input.deployment_pipeline.as_ref(), "deployment pipeline")?;
        let url = self.url(&[&routes::DEPLOYMENT_PIPELINES, &id])?;
        let deployment_pipeline = self.put_json(url, pipeline).await?;
        Ok(UpdateDeploymentPipelineOutput {
            deployment_pipeline,
        })
    }

    /// Delete a deployment pipeline
    pub async fn delete_deployment_pipeline(
        &self,
        input: &DeleteDeploymentPipelineInput,
    ) -> Result<()> {
        let id = required(input.deployment_pipeline_id, "deployment pipeline id")?;
        let url = self.url(&[&routes::DEPLOYMENT_PIPELINES, &id])?;
        self.delete_resource(url).await
    }
}
