//! On-call schedules, their shifts and overrides.

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{decode, routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::user::User;
use crate::types::TeamRef;

api_enum! {
    pub enum ScheduleType {
        Static => "STATIC",
        Recurring => "RECURRING",
    }
}

api_enum! {
    /// How the restrictions of a recurring layer are interpreted
    pub enum RestrictionType {
        TimesOfWeek => "TIMES_OF_WEEK",
        TimesOfDay => "TIMES_OF_DAY",
    }
}

api_enum! {
    pub enum DayOfWeek {
        Monday => "MONDAY",
        Tuesday => "TUESDAY",
        Wednesday => "WEDNESDAY",
        Thursday => "THURSDAY",
        Friday => "FRIDAY",
        Saturday => "SATURDAY",
        Sunday => "SUNDAY",
    }
}

api_enum! {
    /// Optional fields returned only when requested
    pub enum ScheduleInclude {
        CurrentShift => "currentShift",
        NextShift => "nextShift",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<ScheduleType>,

    /// Layers of a recurring schedule
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedule_layers: Vec<ScheduleLayer>,

    /// Shifts of a static schedule
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shifts: Vec<Shift>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_gaps: Option<bool>,

    /// ISO-8601 duration, e.g. `P7D`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_shift_duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_shift: Option<Shift>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_shift: Option<Shift>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleLayer {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<DateTime<Utc>>,

    pub users: Vec<User>,

    /// ISO-8601 duration of one rotation, e.g. `P1W`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction_type: Option<RestrictionType>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<LayerRestriction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayerRestriction {
    pub from: TimeOfWeek,
    pub to: TimeOfWeek,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeOfWeek {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,

    /// Local time as `HH:mm`
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shift {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateScheduleInput {
    pub schedule: Option<Schedule>,
}

#[derive(Debug, Clone)]
pub struct CreateScheduleOutput {
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Default)]
pub struct GetSchedulesInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
    pub include: Vec<ScheduleInclude>,
}

#[derive(Debug, Clone)]
pub struct GetSchedulesOutput {
    pub schedules: Vec<Schedule>,
}

#[derive(Debug, Clone, Default)]
pub struct GetScheduleInput {
    pub schedule_id: Option<i64>,
    pub include: Vec<ScheduleInclude>,
}

#[derive(Debug, Clone)]
pub struct GetScheduleOutput {
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Default)]
pub struct SearchScheduleInput {
    pub schedule_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchScheduleOutput {
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateScheduleInput {
    pub schedule_id: Option<i64>,
    pub schedule: Option<Schedule>,
}

#[derive(Debug, Clone)]
pub struct UpdateScheduleOutput {
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteScheduleInput {
    pub schedule_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct GetScheduleShiftsInput {
    pub schedule_id: Option<i64>,
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    pub exclude_overrides: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct GetScheduleShiftsOutput {
    pub shifts: Vec<Shift>,
}

#[derive(Debug, Clone, Default)]
pub struct GetScheduleOverridesInput {
    pub schedule_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetScheduleOverridesOutput {
    pub overrides: Vec<Shift>,
}

#[derive(Debug, Clone, Default)]
pub struct AddScheduleShiftOverrideInput {
    pub schedule_id: Option<i64>,
    pub shift: Option<Shift>,
}

#[derive(Debug, Clone)]
pub struct AddScheduleShiftOverrideOutput {
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Default)]
pub struct GetScheduleUserOnCallInput {
    pub schedule_id: Option<i64>,
}

/// `shift` is `None` when nobody is currently on call
#[derive(Debug, Clone)]
pub struct GetScheduleUserOnCallOutput {
    pub shift: Option<Shift>,
}

impl IlertClient {
    /// Create a schedule
    pub async fn create_schedule(&self, input: &CreateScheduleInput) -> Result<CreateScheduleOutput> {
        let schedule = required(input.schedule.as_ref(), "schedule")?;
        let url = self.url(&[&routes::SCHEDULES])?;
        let schedule = self.post_json(url, schedule).await?;
        Ok(CreateScheduleOutput { schedule })
    }

    /// List schedules
    pub async fn get_schedules(&self, input: &GetSchedulesInput) -> Result<GetSchedulesOutput> {
        let url = self.url(&[&routes::SCHEDULES])?;
        let query = Query::new()
            .paging(input.start_index, input.max_results)
            .each("include", &input.include);
        let schedules = self.get_json(url, &query).await?;
        Ok(GetSchedulesOutput { schedules })
    }

    /// Get a schedule by id
    pub async fn get_schedule(&self, input: &GetScheduleInput) -> Result<GetScheduleOutput> {
        let id = required(input.schedule_id, "schedule id")?;
        let url = self.url(&[&routes::SCHEDULES, &id])?;
        let query = Query::new().each("include", &input.include);
        let schedule = self.get_json(url, &query).await?;
        Ok(GetScheduleOutput { schedule })
    }

    /// Find a schedule by exact name
    pub async fn search_schedule(&self, input: &SearchScheduleInput) -> Result<SearchScheduleOutput> {
        let name = required(input.schedule_name.as_deref(), "schedule name")?;
        let url = self.url(&[&routes::SCHEDULES, &routes::NAME, &name])?;
        let schedule = self.get_json(url, &Query::new()).await?;
        Ok(SearchScheduleOutput { schedule })
    }

    /// Update a schedule
    pub async fn update_schedule(&self, input: &UpdateScheduleInput) -> Result<UpdateScheduleOutput> {
        let id = required(input.schedule_id, "schedule id")?;
        let schedule = required(input.schedule.as_ref(), "schedule")?;
        let url = self.url(&[&routes::SCHEDULES, &id])?;
        let schedule = self.put_json(url, schedule).await?;
        Ok(UpdateScheduleOutput { schedule })
    }

    /// Delete a schedule
    pub async fn delete_schedule(&self, input: &DeleteScheduleInput) -> Result<()> {
        let id = required(input.schedule_id, "schedule id")?;
        let url = self.url(&[&routes::SCHEDULES, &id])?;
        self.delete_resource(url).await
    }

    /// Get the computed shifts of a schedule in a time range
    pub async fn get_schedule_shifts(
        &self,
        input: &GetScheduleShiftsInput,
    ) -> Result<GetScheduleShiftsOutput> {
        let id = required(input.schedule_id, "schedule id")?;
        let url = self.url(&[&routes::SCHEDULES, &id, &"shifts"])?;
        let query = Query::new()
            .date("from", input.from)
            .date("until", input.until)
            .opt("exclude-overrides", input.exclude_overrides);
        let shifts = self.get_json(url, &query).await?;
        Ok(GetScheduleShiftsOutput { shifts })
    }

    /// Get the overrides of a schedule
    pub async fn get_schedule_overrides(
        &self,
        input: &GetScheduleOverridesInput,
    ) -> Result<GetScheduleOverridesOutput> {
        let id = required(input.schedule_id, "schedule id")?;
        let url = self.url(&[&routes::SCHEDULES, &id, &"overrides"])?;
        let overrides = self.get_json(url, &Query::new()).await?;
        Ok(GetScheduleOverridesOutput { overrides })
    }

    /// Override a schedule with a one-off shift
    pub async fn add_schedule_shift_override(
        &self,
        input: &AddScheduleShiftOverrideInput,
    ) -> Result<AddScheduleShiftOverrideOutput> {
        let id = required(input.schedule_id, "schedule id")?;
        let shift = required(input.shift.as_ref(), "shift")?;
        let url = self.url(&[&routes::SCHEDULES, &id, &"overrides"])?;
        let schedule = self.put_json(url, shift).await?;
        Ok(AddScheduleShiftOverrideOutput { schedule })
    }

    /// Get who is on call right now
    ///
    /// The API answers 204 when nobody is on call, which yields `shift: None`.
    pub async fn get_schedule_user_on_call(
        &self,
        input: &GetScheduleUserOnCallInput,
    ) -> Result<GetScheduleUserOnCallOutput> {
        let id = required(input.schedule_id, "schedule id")?;
        let url = self.url(&[&routes::SCHEDULES, &id, &"user-on-call"])?;
        let response = self
            .send_empty(
                Method::GET,
                url,
                &Query::new(),
                &[StatusCode::OK, StatusCode::NO_CONTENT],
            )
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(GetScheduleUserOnCallOutput { shift: None });
        }

        let shift = decode(response).await?;
        Ok(GetScheduleUserOnCallOutput { shift: Some(shift) })
    }
}
