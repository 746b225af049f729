//! Events create, accept or resolve alerts on an alert source identified by
//! its integration key.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::alert::AlertPriority;
use crate::types::{Image, Link};

api_enum! {
    pub enum EventType {
        Alert => "ALERT",
        Accept => "ACCEPT",
        Resolve => "RESOLVE",
        Comment => "COMMENT",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub integration_key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,

    pub summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Deduplicates events into one alert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<AlertPriority>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_details: Option<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<EventComment>,

    /// Escalation policy routing key, overriding the source's policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateEventInput {
    pub event: Option<Event>,

    /// Full URL to post to instead of `<endpoint>/events`
    pub url: Option<Url>,
}

impl IlertClient {
    /// Send an event; the API accepts it for asynchronous processing
    #[instrument(name = "IlertClient::create_event", skip_all)]
    pub async fn create_event(&self, input: &CreateEventInput) -> Result<()> {
        let event = required(input.event.as_ref(), "event")?;
        let url = match &input.url {
            Some(url) => url.clone(),
            None => self.url(&[&routes::EVENTS])?,
        };

        debug!(event_type = ?event.event_type, alert_key = ?event.alert_key, "Creating event");

        self.send(
            Method::POST,
            url,
            &Query::new(),
            Some(event),
            &[StatusCode::ACCEPTED],
        )
        .await?;
        Ok(())
    }
}
