//! Support hours: weekly windows used for alert source priority rules.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::types::TeamRef;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupportHour {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,

    /// IANA timezone, e.g. `Europe/Berlin`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    pub support_days: SupportDays,
}

/// Support window per weekday; days without a window are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct SupportDays {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday: Option<SupportDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<SupportDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<SupportDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thursday: Option<SupportDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friday: Option<SupportDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturday: Option<SupportDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunday: Option<SupportDay>,
}

/// Time window as `HH:mm` local times
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupportDay {
    pub start: String,
    pub end: String,
}

impl SupportDay {
    /// Support window from `start` to `end`, as `HH:mm`
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateSupportHourInput {
    pub support_hour: Option<SupportHour>,
}

#[derive(Debug, Clone)]
pub struct CreateSupportHourOutput {
    pub support_hour: SupportHour,
}

#[derive(Debug, Clone, Default)]
pub struct GetSupportHoursInput {}

#[derive(Debug, Clone)]
pub struct GetSupportHoursOutput {
    pub support_hours: Vec<SupportHour>,
}

#[derive(Debug, Clone, Default)]
pub struct GetSupportHourInput {
    pub support_hour_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetSupportHourOutput {
    pub support_hour: SupportHour,
}

#[derive(Debug, Clone, Default)]
pub struct SearchSupportHourInput {
    pub support_hour_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchSupportHourOutput {
    pub support_hour: SupportHour,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSupportHourInput {
    pub support_hour_id: Option<i64>,
    pub support_hour: Option<SupportHour>,
}

#[derive(Debug, Clone)]
pub struct UpdateSupportHourOutput {
    pub support_hour: SupportHour,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteSupportHourInput {
    pub support_hour_id: Option<i64>,
}

impl IlertClient {
    /// Create support hours
    pub async fn create_support_hour(
        &self,
        input: &CreateSupportHourInput,
    ) -> Result<CreateSupportHourOutput> {
        let support_hour = required(input.support_hour.as_ref(), "support hour")?;
        let url = self.url(&[&routes::SUPPORT_HOURS])?;
        let support_hour = self.post_json(url, support_hour).await?;
        Ok(CreateSupportHourOutput { support_hour })
    }

    /// List support hours
    pub async fn get_support_hours(
        &self,
        _input: &GetSupportHoursInput,
    ) -> Result<GetSupportHoursOutput> {
        let url = self.url(&[&routes::SUPPORT_HOURS])?;
        let support_hours = self.get_json(url, &Query::new()).await?;
        Ok(GetSupportHoursOutput { support_hours })
    }

    /// Get support hours by id
    pub async fn get_support_hour(
        &self,
        input: &GetSupportHourInput,
    ) -> Result<GetSupportHourOutput> {
        let id = required(input.support_hour_id, "support hour id")?;
        let url = self.url(&[&routes::SUPPORT_HOURS, &id])?;
        let support_hour = self.get_json(url, &Query::new()).await?;
        Ok(GetSupportHourOutput { support_hour })
    }

    /// Find support hours by exact name
    pub async fn search_support_hour(
        &self,
        input: &SearchSupportHourInput,
    ) -> Result<SearchSupportHourOutput> {
        let name = required(input.support_hour_name.as_deref(), "support hour name")?;
        let url = self.url(&[&routes::SUPPORT_HOURS, &routes::NAME, &name])?;
        let support_hour = self.get_json(url, &Query::new()).await?;
        Ok(SearchSupportHourOutput { support_hour })
    }

    /// Update support hours
    pub async fn update_support_hour(
        &self,
        input: &UpdateSupportHourInput,
    ) -> Result<UpdateSupportHourOutput> {
        let id = required(input.support_hour_id, "support hour id")?;
        let support_hour = required(input.support_hour.as_ref(), "support hour")?;
        let url = self.url(&[&routes::SUPPORT_HOURS, &id])?;
        let support_hour = self.put_json(url, support_hour).await?;
        Ok(UpdateSupportHourOutput { support_hour })
    }

    /// Delete support hours
    pub async fn delete_support_hour(&self, input: &DeleteSupportHourInput) -> Result<()> {
        let id = required(input.support_hour_id, "support hour id")?;
        let url = self.url(&[&routes::SUPPORT_HOURS, &id])?;
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
    async fn test_create_support_hour_body() {
        let mock_server = MockServer::start().await;

        let expected = json!({
            "name": "Office",
            "timezone": "Europe/Berlin",
            "supportDays": {
                "MONDAY": {"start": "08:00", "end": "17:00"},
                "FRIDAY": {"start": "08:00", "end": "14:00"}
            }
        });

        Mock::given(method("POST"))
            .and(path("/support-hours"))
            .and(body_json(&expected))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 8,
                "name": "Office",
                "timezone": "Europe/Berlin",
                "supportDays": {
                    "MONDAY": {"start": "08:00", "end": "17:00"},
                    "FRIDAY": {"start": "08:00", "end": "14:00"}
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_support_hour(&CreateSupportHourInput {
                support_hour: Some(SupportHour {
                    name: "Office".to_string(),
                    timezone: Some("Europe/Berlin".to_string()),
                    support_days: SupportDays {
                        monday: Some(SupportDay::new("08:00", "17:00")),
                        friday: Some(SupportDay::new("08:00", "14:00")),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!(output.support_hour.id, Some(8));
        assert!(output.support_hour.support_days.sunday.is_none());
    }

    #[tokio::test]
    async fn test_get_support_hours_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/support-hours"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_support_hours(&GetSupportHoursInput::default())
            .await
            .unwrap();
        assert!(output.support_hours.is_empty());
    }

    #[tokio::test]
    async fn test_delete_support_hour_requires_id() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .delete_support_hour(&DeleteSupportHourInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "support hour id is required");
    }
}
