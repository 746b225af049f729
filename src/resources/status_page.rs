//! Public or private status pages showing the health of services.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::metric::Metric;
use crate::resources::service::{Service, ServiceStatus};
use crate::types::{TeamRef, Visibility};

api_enum! {
    pub enum StatusPageLayout {
        SingleColumn => "SINGLE_COLUMN",
        ResourcesOnTop => "RESOURCES_ON_TOP",
    }
}

api_enum! {
    pub enum StatusPageAppearance {
        Light => "LIGHT",
        Dark => "DARK",
    }
}

api_enum! {
    pub enum StatusPageElementType {
        Service => "SERVICE",
        Group => "GROUP",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_from_search: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_subscribe_action: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_incident_history_option: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_layout: Option<StatusPageLayout>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_redirect_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated: Option<bool>,

    /// Worst status of the page's services
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,

    /// Allowed client IPs of a private page
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_whitelist: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_wide_view: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<StatusPageStructure>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<StatusPageAppearance>,
}

/// Order and grouping of services on the page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusPageStructure {
    pub elements: Vec<StatusPageElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusPageElement {
    pub id: i64,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub element_type: Option<StatusPageElementType>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Services of a group element
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StatusPageElement>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateStatusPageInput {
    pub status_page: Option<StatusPage>,
}

#[derive(Debug, Clone)]
pub struct CreateStatusPageOutput {
    pub status_page: StatusPage,
}

#[derive(Debug, Clone, Default)]
pub struct GetStatusPagesInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetStatusPagesOutput {
    pub status_pages: Vec<StatusPage>,
}

#[derive(Debug, Clone, Default)]
pub struct GetStatusPageInput {
    pub status_page_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetStatusPageOutput {
    pub status_page: StatusPage,
}

#[derive(Debug, Clone, Default)]
pub struct SearchStatusPageInput {
    pub status_page_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchStatusPageOutput {
    pub status_page: StatusPage,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStatusPageInput {
    pub status_page_id: Option<i64>,
    pub status_page: Option<StatusPage>,
}

#[derive(Debug, Clone)]
pub struct UpdateStatusPageOutput {
    pub status_page: StatusPage,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteStatusPageInput {
    pub status_page_id: Option<i64>,
}

impl IlertClient {
    /// Create a status page
    pub async fn create_status_page(
        &self,
        input: &CreateStatusPageInput,
    ) -> Result<CreateStatusPageOutput> {
        let status_page = required(input.status_page.as_ref(), "status page")?;
        let url = self.url(&[&routes::STATUS_PAGES])?;
        let status_page = self.post_json(url, status_page).await?;
        Ok(CreateStatusPageOutput { status_page })
    }

    /// List status pages
    pub async fn get_status_pages(
        &self,
        input: &GetStatusPagesInput,
    ) -> Result<GetStatusPagesOutput> {
        let url = self.url(&[&routes::STATUS_PAGES])?;
        let query = Query::new().paging(input.start_index, input.max_results);
        let status_pages = self.get_json(url, &query).await?;
        Ok(GetStatusPagesOutput { status_pages })
    }

    /// Get a status page by id
    pub async fn get_status_page(&self, input: &GetStatusPageInput) -> Result<GetStatusPageOutput> {
        let id = required(input.status_page_id, "status page id")?;
        let url = self.url(&[&routes::STATUS_PAGES, &id])?;
        let status_page = self.get_json(url, &Query::new()).await?;
        Ok(GetStatusPageOutput { status_page })
    }

    /// Find a status page by exact name
    pub async fn search_status_page(
        &self,
        input: &SearchStatusPageInput,
    ) -> Result<SearchStatusPageOutput> {
        let name = required(input.status_page_name.as_deref(), "status page name")?;
        let url = self.url(&[&routes::STATUS_PAGES, &routes::NAME, &name])?;
        let status_page = self.get_json(url, &Query::new()).await?;
        Ok(SearchStatusPageOutput { status_page })
    }

    /// Update a status page
    pub async fn update_status_page(
        &self,
        input: &UpdateStatusPageInput,
    ) -> Result<UpdateStatusPageOutput> {
        let id = required(input.status_page_id, "status page id")?;
        let status_page = required(input.status_page.as_ref(), "status page")?;
        let url = self.url(&[&routes::STATUS_PAGES, &id])?;
        let status_page = self.put_json(url, status_page).await?;
        Ok(UpdateStatusPageOutput { status_page })
    }

    /// Delete a status page
    pub async fn delete_status_page(&self, input: &DeleteStatusPageInput) -> Result<()> {
        let id = required(input.status_page_id, "status page id")?;
        let url = self.url(&[&routes::STATUS_PAGES, &id])?;
        self.delete_resource(url).await
    }
}
