//! Per-user notification preferences.
//!
//! Four preference families live under
//! `/users/{user-id}/notification-preferences/{family}`; they share the same
//! CRUD shape and differ only in their payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};

api_enum! {
    /// Channel a notification is delivered through
    pub enum NotificationMethod {
        Email => "EMAIL",
        Sms => "SMS",
        Push => "PUSH",
        Voice => "VOICE",
        WhatsApp => "WHATSAPP",
        Telegram => "TELEGRAM",
    }
}

api_enum! {
    /// Alert priority an alert preference applies to
    pub enum AlertPreferenceType {
        HighPriority => "HIGH_PRIORITY",
        LowPriority => "LOW_PRIORITY",
    }
}

api_enum! {
    pub enum DutyPreferenceType {
        OnCall => "ON_CALL",
    }
}

api_enum! {
    /// Alert lifecycle change an update preference applies to
    pub enum UpdatePreferenceType {
        AlertAccepted => "ALERT_ACCEPTED",
        AlertResolved => "ALERT_RESOLVED",
        AlertEscalated => "ALERT_ESCALATED",
    }
}

/// Contact a preference delivers to; only `id` is needed in requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceContact {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl PreferenceContact {
    /// Reference a contact by id
    pub fn new(id: i64) -> Self {
        Self { id, target: None }
    }
}

/// How a user is notified about new alerts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserAlertPreference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub method: Option<NotificationMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<PreferenceContact>,

    pub delay_min: i64,

    #[serde(rename = "type")]
    pub preference_type: Option<AlertPreferenceType>,
}

/// How a user is reminded of upcoming on-call duty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDutyPreference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub method: Option<NotificationMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<PreferenceContact>,

    /// Minutes before the shift starts
    pub before_min: i64,

    #[serde(rename = "type")]
    pub preference_type: Option<DutyPreferenceType>,
}

/// How a user is notified about subscribed incidents and services
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSubscriptionPreference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub method: Option<NotificationMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<PreferenceContact>,
}

/// How a user is notified when an alert they responded to changes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserUpdatePreference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub method: Option<NotificationMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<PreferenceContact>,

    #[serde(rename = "type")]
    pub preference_type: Option<UpdatePreferenceType>,
}

/// A notification preference family and its route segment
pub trait NotificationPreference: Serialize + DeserializeOwned {
    const FAMILY: &'static str;
}

impl NotificationPreference for UserAlertPreference {
    const FAMILY: &'static str = "alerts";
}

impl NotificationPreference for UserDutyPreference {
    const FAMILY: &'static str = "duties";
}

impl NotificationPreference for UserSubscriptionPreference {
    const FAMILY: &'static str = "subscriptions";
}

impl NotificationPreference for UserUpdatePreference {
    const FAMILY: &'static str = "updates";
}

#[derive(Debug, Clone)]
pub struct CreateUserPreferenceInput<P> {
    pub user_id: Option<i64>,
    pub preference: Option<P>,
}

impl<P> Default for CreateUserPreferenceInput<P> {
    fn default() -> Self {
        Self {
            user_id: None,
            preference: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetUserPreferencesInput {
    pub user_id: Option<i64>,
}

/// Addresses a single preference of a user
#[derive(Debug, Clone, Default)]
pub struct UserPreferenceInput {
    pub user_id: Option<i64>,
    pub preference_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct UpdateUserPreferenceInput<P> {
    pub user_id: Option<i64>,
    pub preference_id: Option<i64>,
    pub preference: Option<P>,
}

impl<P> Default for UpdateUserPreferenceInput<P> {
    fn default() -> Self {
        Self {
            user_id: None,
            preference_id: None,
            preference: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserPreferenceOutput<P> {
    pub preference: P,
}

#[derive(Debug, Clone)]
pub struct UserPreferencesOutput<P> {
    pub preferences: Vec<P>,
}

const NOTIFICATION_PREFERENCES: &str = "notification-preferences";

impl IlertClient {
    async fn create_preference<P: NotificationPreference>(
        &self,
        input: &CreateUserPreferenceInput<P>,
    ) -> Result<UserPreferenceOutput<P>> {
        let user_id = required(input.user_id, "user id")?;
        let preference = required(input.preference.as_ref(), "preference")?;
        let url = self.url(&[
            &routes::USERS,
            &user_id,
            &NOTIFICATION_PREFERENCES,
            &P::FAMILY,
        ])?;
        let preference = self.post_json(url, preference).await?;
        Ok(UserPreferenceOutput { preference })
    }

    async fn list_preferences<P: NotificationPreference>(
        &self,
        input: &GetUserPreferencesInput,
    ) -> Result<UserPreferencesOutput<P>> {
        let user_id = required(input.user_id, "user id")?;
        let url = self.url(&[
            &routes::USERS,
            &user_id,
            &NOTIFICATION_PREFERENCES,
            &P::FAMILY,
        ])?;
        let preferences = self.get_json(url, &Query::new()).await?;
        Ok(UserPreferencesOutput { preferences })
    }

    async fn get_preference<P: NotificationPreference>(
        &self,
        input: &UserPreferenceInput,
    ) -> Result<UserPreferenceOutput<P>> {
        let user_id = required(input.user_id, "user id")?;
        let preference_id = required(input.preference_id, "preference id")?;
        let url = self.url(&[
            &routes::USERS,
            &user_id,
            &NOTIFICATION_PREFERENCES,
            &P::FAMILY,
            &preference_id,
        ])?;
        let preference = self.get_json(url, &Query::new()).await?;
        Ok(UserPreferenceOutput { preference })
    }

    async fn update_preference<P: NotificationPreference>(
        &self,
        input: &UpdateUserPreferenceInput<P>,
    ) -> Result<UserPreferenceOutput<P>> {
        let user_id = required(input.user_id, "user id")?;
        let preference_id = required(input.preference_id, "preference id")?;
        let preference = required(input.preference.as_ref(), "preference")?;
        let url = self.url(&[
            &routes::USERS,
            &user_id,
            &NOTIFICATION_PREFERENCES,
            &P::FAMILY,
            &preference_id,
        ])?;
        let preference = self.put_json(url, preference).await?;
        Ok(UserPreferenceOutput { preference })
    }

    async fn delete_preference<P: NotificationPreference>(
        &self,
        input: &UserPreferenceInput,
    ) -> Result<()> {
        let user_id = required(input.user_id, "user id")?;
        let preference_id = required(input.preference_id, "preference id")?;
        let url = self.url(&[
            &routes::USERS,
            &user_id,
            &NOTIFICATION_PREFERENCES,
            &P::FAMILY,
            &preference_id,
        ])?;
        self.delete_resource(url).await
    }

    /// Create an alert notification preference
    pub async fn create_user_alert_preference(
        &self,
        input: &CreateUserPreferenceInput<UserAlertPreference>,
    ) -> Result<UserPreferenceOutput<UserAlertPreference>> {
        self.create_preference(input).await
    }

    /// List a user's alert notification preferences
    pub async fn get_user_alert_preferences(
        &self,
        input: &GetUserPreferencesInput,
    ) -> Result<UserPreferencesOutput<UserAlertPreference>> {
        self.list_preferences(input).await
    }

    /// Get an alert notification preference
    pub async fn get_user_alert_preference(
        &self,
        input: &UserPreferenceInput,
    ) -> Result<UserPreferenceOutput<UserAlertPreference>> {
        self.get_preference(input).await
    }

    /// Update an alert notification preference
    pub async fn update_user_alert_preference(
        &self,
        input: &UpdateUserPreferenceInput<UserAlertPreference>,
    ) -> Result<UserPreferenceOutput<UserAlertPreference>> {
        self.update_preference(input).await
    }

    /// Delete an alert notification preference
    pub async fn delete_user_alert_preference(&self, input: &UserPreferenceInput) -> Result<()> {
        self.delete_preference::<UserAlertPreference>(input).await
    }

    /// Create an on-call duty reminder preference
    pub async fn create_user_duty_preference(
        &self,
        input: &CreateUserPreferenceInput<UserDutyPreference>,
    ) -> Result<UserPreferenceOutput<UserDutyPreference>> {
        self.create_preference(input).await
    }

    /// List a user's duty reminder preferences
    pub async fn get_user_duty_preferences(
        &self,
        input: &GetUserPreferencesInput,
    ) -> Result<UserPreferencesOutput<UserDutyPreference>> {
        self.list_preferences(input).await
    }

    /// Get a duty reminder preference
    pub async fn get_user_duty_preference(
        &self,
        input: &UserPreferenceInput,
    ) -> Result<UserPreferenceOutput<UserDutyPreference>> {
        self.get_preference(input).await
    }

    /// Update a duty reminder preference
    pub async fn update_user_duty_preference(
        &self,
        input: &UpdateUserPreferenceInput<UserDutyPreference>,
    ) -> Result<UserPreferenceOutput<UserDutyPreference>> {
        self.update_preference(input).await
    }

    /// Delete a duty reminder preference
    pub async fn delete_user_duty_preference(&self, input: &UserPreferenceInput) -> Result<()> {
        self.delete_preference::<UserDutyPreference>(input).await
    }

    /// Create a subscription notification preference
    pub async fn create_user_subscription_preference(
        &self,
        input: &CreateUserPreferenceInput<UserSubscriptionPreference>,
    ) -> Result<UserPreferenceOutput<UserSubscriptionPreference>> {
        self.create_preference(input).await
    }

    /// List a user's subscription notification preferences
    pub async fn get_user_subscription_preferences(
        &self,
        input: &GetUserPreferencesInput,
    ) -> Result<UserPreferencesOutput<UserSubscriptionPreference>> {
        self.list_preferences(input).await
    }

    /// Get a subscription notification preference
    pub async fn get_user_subscription_preference(
        &self,
        input: &UserPreferenceInput,
    ) -> Result<UserPreferenceOutput<UserSubscriptionPreference>> {
        self.get_preference(input).await
    }

    /// Update a subscription notification preference
    pub async fn update_user_subscription_preference(
        &self,
        input: &UpdateUserPreferenceInput<UserSubscriptionPreference>,
    ) -> Result<UserPreferenceOutput<UserSubscriptionPreference>> {
        self.update_preference(input).await
    }

    /// Delete a subscription notification preference
    pub async fn delete_user_subscription_preference(
        &self,
        input: &UserPreferenceInput,
    ) -> Result<()> {
        self.delete_preference::<UserSubscriptionPreference>(input)
            .await
    }

    /// Create an alert update notification preference
    pub async fn create_user_update_preference(
        &self,
        input: &CreateUserPreferenceInput<UserUpdatePreference>,
    ) -> Result<UserPreferenceOutput<UserUpdatePreference>> {
        self.create_preference(input).await
    }

    /// List a user's alert update notification preferences
    pub async fn get_user_update_preferences(
        &self,
        input: &GetUserPreferencesInput,
    ) -> Result<UserPreferencesOutput<UserUpdatePreference>> {
        self.list_preferences(input).await
    }

    /// Get an alert update notification preference
    pub async fn get_user_update_preference(
        &self,
        input: &UserPreferenceInput,
    ) -> Result<UserPreferenceOutput<UserUpdatePreference>> {
        self.get_preference(input).await
    }

    /// Update an alert update notification preference
    pub async fn update_user_update_preference(
        &self,
        input: &UpdateUserPreferenceInput<UserUpdatePreference>,
    ) -> Result<UserPreferenceOutput<UserUpdatePreference>> {
        self.update_preference(input).await
    }

    /// Delete an alert update notification preference
    pub async fn delete_user_update_preference(&self, input: &UserPreferenceInput) -> Result<()> {
        self.delete_preference::<UserUpdatePreference>(input).await
    }
}
