//! Services are the components whose health is published on status pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::incident::Incident;
use crate::types::TeamRef;

api_enum! {
    /// Health of a service, ordered from best to worst
    pub enum ServiceStatus {
        Operational => "OPERATIONAL",
        UnderMaintenance => "UNDER_MAINTENANCE",
        Degraded => "DEGRADED",
        PartialOutage => "PARTIAL_OUTAGE",
        MajorOutage => "MAJOR_OUTAGE",
    }
}

api_enum! {
    pub enum ServiceInclude {
        Subscribed => "subscribed",
        Uptime => "uptime",
        Incidents => "incidents",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_open_incident_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_uptime_history: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<ServiceUptime>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub incidents: Vec<Incident>,
}

impl Service {
    /// Reference a service by id
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceUptime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_end: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outages: Vec<ServiceOutage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_percentage: Option<ServiceUptimePercentage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceOutage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
}

/// Uptime over the last 90, 60 and 30 days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceUptimePercentage {
    pub p90: f64,
    pub p60: f64,
    pub p30: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CreateServiceInput {
    pub service: Option<Service>,
}

#[derive(Debug, Clone)]
pub struct CreateServiceOutput {
    pub service: Service,
}

#[derive(Debug, Clone, Default)]
pub struct GetServicesInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub include: Vec<ServiceInclude>,
}

#[derive(Debug, Clone)]
pub struct GetServicesOutput {
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Default)]
pub struct GetServiceInput {
    pub service_id: Option<i64>,
    pub include: Vec<ServiceInclude>,
}

#[derive(Debug, Clone)]
pub struct GetServiceOutput {
    pub service: Service,
}

#[derive(Debug, Clone, Default)]
pub struct SearchServiceInput {
    pub service_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchServiceOutput {
    pub service: Service,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceInput {
    pub service_id: Option<i64>,
    pub service: Option<Service>,
}

#[derive(Debug, Clone)]
pub struct UpdateServiceOutput {
    pub service: Service,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteServiceInput {
    pub service_id: Option<i64>,
}

impl IlertClient {
    /// Create a service
    pub async fn create_service(&self, input: &CreateServiceInput) -> Result<CreateServiceOutput> {
        let service = required(input.service.as_ref(), "service")?;
        let url = self.url(&[&routes::SERVICES])?;
        let service = self.post_json(url, service).await?;
        Ok(CreateServiceOutput { service })
    }

    /// List services
    pub async fn get_services(&self, input: &GetServicesInput) -> Result<GetServicesOutput> {
        let url = self.url(&[&routes::SERVICES])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .each("include", &input.include);
        let services = self.get_json(url, &query).await?;
        Ok(GetServicesOutput { services })
    }

    /// Get a service by id
    pub async fn get_service(&self, input: &GetServiceInput) -> Result<GetServiceOutput> {
        let id = required(input.service_id, "service id")?;
        let url = self.url(&[&routes::SERVICES, &id])?;
        let query = Query::new().each("include", &input.include);
        let service = self.get_json(url, &query).await?;
        Ok(GetServiceOutput { service })
    }

    /// Find a service by exact name
    pub async fn search_service(&self, input: &SearchServiceInput) -> Result<SearchServiceOutput> {
        let name = required(input.service_name.as_deref(), "service name")?;
        let url = self.url(&[&routes::SERVICES, &routes::NAME, &name])?;
        let service = self.get_json(url, &Query::new()).await?;
        Ok(SearchServiceOutput { service })
    }

    /// Update a service
    pub async fn update_service(&self, input: &UpdateServiceInput) -> Result<UpdateServiceOutput> {
        let id = required(input.service_id, "service id")?;
        let service = required(input.service.as_ref(), "service")?;
        let url = self.url(&[&routes::SERVICES, &id])?;
        let service = self.put_json(url, service).await?;
        Ok(UpdateServiceOutput { service })
    }

    /// Delete a service
    pub async fn delete_service(&self, input: &DeleteServiceInput) -> Result<()> {
        let id = required(input.service_id, "service id")?;
        let url = self.url(&[&routes::SERVICES, &id])?;
        self.delete_resource(url).await
    }
}
