//! One module per API resource family: the resource shapes, the
//! `...Input`/`...Output` types of each operation, and the operations
//! themselves as methods on [`IlertClient`](crate::IlertClient).

pub mod alert;
pub mod alert_action;
pub mod alert_source;
pub mod automation_rule;
pub mod call_flow;
pub mod connection;
pub mod connector;
pub mod deployment_pipeline;
pub mod escalation_policy;
pub mod event;
pub mod heartbeat_monitor;
pub mod incident;
pub mod incident_template;
pub mod metric;
pub mod metric_data_source;
pub mod number;
pub mod schedule;
pub mod series;
pub mod service;
pub mod status_page;
pub mod status_page_group;
pub mod support_hour;
pub mod team;
pub mod uptime_monitor;
pub mod user;
pub mod user_contact;
pub mod user_preference;
