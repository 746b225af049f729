//! Reusable incident texts.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::incident::IncidentStatus;
use crate::types::TeamRef;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IncidentTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    pub summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notification: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateIncidentTemplateInput {
    pub incident_template: Option<IncidentTemplate>,
}

#[derive(Debug, Clone)]
pub struct CreateIncidentTemplateOutput {
    pub incident_template: IncidentTemplate,
}

#[derive(Debug, Clone, Default)]
pub struct GetIncidentTemplatesInput {}

#[derive(Debug, Clone)]
pub struct GetIncidentTemplatesOutput {
    pub incident_templates: Vec<IncidentTemplate>,
}

#[derive(Debug, Clone, Default)]
pub struct GetIncidentTemplateInput {
    pub incident_template_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetIncidentTemplateOutput {
    pub incident_template: IncidentTemplate,
}

#[derive(Debug, Clone, Default)]
pub struct SearchIncidentTemplateInput {
    pub incident_template_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchIncidentTemplateOutput {
    pub incident_template: IncidentTemplate,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateIncidentTemplateInput {
    pub incident_template_id: Option<i64>,
    pub incident_template: Option<IncidentTemplate>,
}

#[derive(Debug, Clone)]
pub struct UpdateIncidentTemplateOutput {
    pub incident_template: IncidentTemplate,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteIncidentTemplateInput {
    pub incident_template_id: Option<i64>,
}

impl IlertClient {
    /// Create an incident template
    pub async fn create_incident_template(
        &self,
        input: &CreateIncidentTemplateInput,
    ) -> Result<CreateIncidentTemplateOutput> {
        let template = required(input.incident_template.as_ref(), "incident template")?;
        let url = self.url(&[&routes::INCIDENT_TEMPLATES])?;
        let incident_template = self.post_json(url, template).await?;
        Ok(CreateIncidentTemplateOutput { incident_template })
    }

    /// List incident templates
    pub async fn get_incident_templates(
        &self,
        _input: &GetIncidentTemplatesInput,
    ) -> Result<GetIncidentTemplatesOutput> {
        let url = self.url(&[&routes::INCIDENT_TEMPLATES])?;
        let incident_templates = self.get_json(url, &Query::new()).await?;
        Ok(GetIncidentTemplatesOutput { incident_templates })
    }

    /// Get an incident template by id
    pub async fn get_incident_template(
        &self,
        input: &GetIncidentTemplateInput,
    ) -> Result<GetIncidentTemplateOutput> {
        let id = required(input.incident_template_id, "incident template id")?;
        let url = self.url(&[&routes::INCIDENT_TEMPLATES, &id])?;
        let incident_template = self.get_json(url, &Query::new()).await?;
        Ok(GetIncidentTemplateOutput { incident_template })
    }

    /// Find an incident template by exact name
    pub async fn search_incident_template(
        &self,
        input: &SearchIncidentTemplateInput,
    ) -> Result<SearchIncidentTemplateOutput> {
        let name = required(
            input.incident_template_name.as_deref(),
            "incident template name",
        )?;
        let url = self.url(&[&routes::INCIDENT_TEMPLATES, &routes::NAME, &name])?;
        let incident_template = self.get_json(url, &Query::new()).await?;
        Ok(SearchIncidentTemplateOutput { incident_template })
    }

    /// Update an incident template
    pub async fn update_incident_template(
        &self,
        input: &UpdateIncidentTemplateInput,
    ) -> Result<UpdateIncidentTemplateOutput> {
        let id = required(input.incident_template_id, "incident template id")?;
        let template = required(input.incident_template.as_ref(), "incident template")?;
        let url = self.url(&[&routes::INCIDENT_TEMPLATES, &id])?;
        let incident_template = self.put_json(url, template).await?;
        Ok(UpdateIncidentTemplateOutput { incident_template })
    }

    /// Delete an incident template
    pub async fn delete_incident_template(
        &self,
        input: &DeleteIncidentTemplateInput,
    ) -> Result<()> {
        let id = required(input.incident_template_id, "incident template id")?;
        let url = self.url(&[&routes::INCIDENT_TEMPLATES, &id])?;
        self.delete_resource(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_update_incident_template() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/incident-templates/8"))
            .and(body_json(json!({
                "name": "DB maintenance",
                "summary": "Scheduled database maintenance",
                "status": "MONITORING",
                "sendNotification": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 8,
                "name": "DB maintenance",
                "summary": "Scheduled database maintenance",
                "status": "MONITORING",
                "sendNotification": false
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .update_incident_template(&UpdateIncidentTemplateInput {
                incident_template_id: Some(8),
                incident_template: Some(IncidentTemplate {
                    name: "DB maintenance".to_string(),
                    summary: "Scheduled database maintenance".to_string(),
                    status: Some(IncidentStatus::Monitoring),
                    send_notification: Some(false),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!(output.incident_template.id, Some(8));
        assert_eq!(output.incident_template.send_notification, Some(false));
    }

    #[tokio::test]
    async fn test_get_incident_templates_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/incident-templates"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_incident_templates(&GetIncidentTemplatesInput::default())
            .await
            .unwrap();
        assert!(output.incident_templates.is_empty());
    }

    #[tokio::test]
    async fn test_get_incident_template_requires_id() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .get_incident_template(&GetIncidentTemplateInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "incident template id is required");
    }
}
