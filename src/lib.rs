//! # ilert API
//!
//! A typed async client for the [ilert](https://www.ilert.com) incident
//! management REST API.
//!
//! ## Features
//!
//! - Alerts, alert sources, alert actions and events
//! - On-call schedules, escalation policies, support hours and teams
//! - Incidents, services and status pages
//! - Uptime and heartbeat monitors, metrics and call flows
//! - Bearer token or basic authentication, configurable from the environment
//!
//! Every operation takes an `...Input` struct and returns an `...Output`
//! struct. Required fields are checked before any request is sent.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ilert_api::{
//!     AlertStatus, Event, EventType, CreateEventInput, GetAlertsInput, IlertClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IlertClient::from_env()?;
//!
//!     client
//!         .create_event(&CreateEventInput {
//!             event: Some(Event {
//!                 integration_key: "il1api123".to_string(),
//!                 event_type: Some(EventType::Alert),
//!                 summary: "Disk almost full on db-1".to_string(),
//!                 ..Default::default()
//!             }),
//!             url: None,
//!         })
//!         .await?;
//!
//!     let open = client
//!         .get_alerts(&GetAlertsInput {
//!             states: vec![AlertStatus::New, AlertStatus::Accepted],
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     for alert in open.alerts {
//!         println!("{} {}", alert.id, alert.summary);
//!     }
//!     Ok(())
//! }
//! ```

#[macro_use]
mod macros;

mod client;
mod errors;
mod provider;
mod types;

pub mod resources;

pub use client::{Auth, IlertClient, IlertClientBuilder, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use errors::{IlertError, Result};
pub use types::{Image, Link, Phone, TeamRef, Visibility};

pub use resources::alert::*;
pub use resources::alert_action::*;
pub use resources::alert_source::*;
pub use resources::automation_rule::*;
pub use resources::call_flow::*;
pub use resources::connection::*;
pub use resources::connector::*;
pub use resources::deployment_pipeline::*;
pub use resources::escalation_policy::*;
pub use resources::event::*;
pub use resources::heartbeat_monitor::*;
pub use resources::incident::*;
pub use resources::incident_template::*;
pub use resources::metric::*;
pub use resources::metric_data_source::*;
pub use resources::number::*;
pub use resources::schedule::*;
pub use resources::series::*;
pub use resources::service::*;
pub use resources::status_page::*;
pub use resources::status_page_group::*;
pub use resources::support_hour::*;
pub use resources::team::*;
pub use resources::uptime_monitor::*;
pub use resources::user::*;
pub use resources::user_contact::*;
pub use resources::user_preference::*;
