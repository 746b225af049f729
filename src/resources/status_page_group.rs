//! Named groups of services on a status page, under
//! `/status-pages/{status-page-id}/groups`.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusPageGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateStatusPageGroupInput {
    pub status_page_id: Option<i64>,
    pub status_page_group: Option<StatusPageGroup>,
}

#[derive(Debug, Clone)]
pub struct CreateStatusPageGroupOutput {
    pub status_page_group: StatusPageGroup,
}

#[derive(Debug, Clone, Default)]
pub struct GetStatusPageGroupsInput {
    pub status_page_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetStatusPageGroupsOutput {
    pub status_page_groups: Vec<StatusPageGroup>,
}

#[derive(Debug, Clone, Default)]
pub struct GetStatusPageGroupInput {
    pub status_page_id: Option<i64>,
    pub status_page_group_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetStatusPageGroupOutput {
    pub status_page_group: StatusPageGroup,
}

#[derive(Debug, Clone, Default)]
pub struct SearchStatusPageGroupInput {
    pub status_page_id: Option<i64>,
    pub status_page_group_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchStatusPageGroupOutput {
    pub status_page_group: StatusPageGroup,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStatusPageGroupInput {
    pub status_page_id: Option<i64>,
    pub status_page_group_id: Option<i64>,
    pub status_page_group: Option<StatusPageGroup>,
}

#[derive(Debug, Clone)]
pub struct UpdateStatusPageGroupOutput {
    pub status_page_group: StatusPageGroup,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteStatusPageGroupInput {
    pub status_page_id: Option<i64>,
    pub status_page_group_id: Option<i64>,
}

const GROUPS: &str = "groups";

impl IlertClient {
    /// Create a status page group
    pub async fn create_status_page_group(
        &self,
        input: &CreateStatusPageGroupInput,
    ) -> Result<CreateStatusPageGroupOutput> {
        let page_id = required(input.status_page_id, "status page id")?;
        let group = required(input.status_page_group.as_ref(), "status page group")?;
        let url = self.url(&[&routes::STATUS_PAGES, &page_id, &GROUPS])?;
        let status_page_group = self.post_json(url, group).await?;
        Ok(CreateStatusPageGroupOutput { status_page_group })
    }

    /// List status page groups
    pub async fn get_status_page_groups(
        &self,
        input: &GetStatusPageGroupsInput,
    ) -> Result<GetStatusPageGroupsOutput> {
        let page_id = required(input.status_page_id, "status page id")?;
        let url = self.url(&[&routes::STATUS_PAGES, &page_id, &GROUPS])?;
        let status_page_groups = self.get_json(url, &Query::new()).await?;
        Ok(GetStatusPageGroupsOutput { status_page_groups })
    }

    /// Get a status page group by id
    pub async fn get_status_page_group(
        &self,
        input: &GetStatusPageGroupInput,
    ) -> Result<GetStatusPageGroupOutput> {
        let page_id = required(input.status_page_id, "status page id")?;
        let group_id = required(input.status_page_group_id, "status page group id")?;
        let url = self.url(&[&routes::STATUS_PAGES, &page_id, &GROUPS, &group_id])?;
        let status_page_group = self.get_json(url, &Query::new()).await?;
        Ok(GetStatusPageGroupOutput { status_page_group })
    }

    /// Find a status page group by exact name
    pub async fn search_status_page_group(
        &self,
        input: &SearchStatusPageGroupInput,
    ) -> Result<SearchStatusPageGroupOutput> {
        let page_id = required(input.status_page_id, "status page id")?;
        let name = required(
            input.status_page_group_name.as_deref(),
            "status page group name",
        )?;
        let url = self.url(&[&routes::STATUS_PAGES, &page_id, &GROUPS, &routes::NAME, &name])?;
        let status_page_group = self.get_json(url, &Query::new()).await?;
        Ok(SearchStatusPageGroupOutput { status_page_group })
    }

    /// Update a status page group
    pub async fn update_status_page_group(
        &self,
        input: &UpdateStatusPageGroupInput,
    ) -> Result<UpdateStatusPageGroupOutput> {
        let page_id = required(input.status_page_id, "status page id")?;
        let group_id = required(input.status_page_group_id, "status page group id")?;
        let group = required(input.status_page_group.as_ref(), "status page group")?;
        let url = self.url(&[&routes::STATUS_PAGES, &page_id, &GROUPS, &group_id])?;
        let status_page_group = self.put_json(url, group).await?;
        Ok(UpdateStatusPageGroupOutput { status_page_group })
    }

    /// Delete a status page group
    pub async fn delete_status_page_group(
        &self,
        input: &DeleteStatusPageGroupInput,
    ) -> Result<()> {
        let page_id = required(input.status_page_id, "status page id")?;
        let group_id = required(input.status_page_group_id, "status page group id")?;
        let url = self.url(&[&routes::STATUS_PAGES, &page_id, &GROUPS, &group_id])?;
        self.delete_resource(url).await
    }
}
