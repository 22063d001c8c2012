//! Bodies of create/update operations.
//!
//! Members left as `None` are not sent. Plain members are required by the
//! remote method.

use crate::core::types::{CallRecording, CampaignStatus, EmployeeStatus};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignPayload {
    pub name: String,
    pub status: Option<CampaignStatus>,
    pub site_id: i64,
    pub site_blocks: Vec<Value>,
    pub campaign_conditions: Value,
    pub dynamic_call_tracking: Value,
    pub description: Option<String>,
}

/// Relative weights of each campaign parameter for one site
#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignWeightsPayload {
    pub site_id: i64,
    pub entrance_page: Option<i64>,
    pub referrer_domain: Option<i64>,
    pub search_engine: Option<i64>,
    pub search_query: Option<i64>,
    pub engine: Option<i64>,
    pub referrer: Option<i64>,
    pub channel: Option<i64>,
    pub location: Option<i64>,
    pub utm_tags: Option<i64>,
    pub os_tags: Option<i64>,
    pub other_tags: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SitePayload {
    pub domain_name: String,
    pub default_phone_number: String,
    pub industry_id: i64,
    pub target_call_min_duration: Option<u32>,
    pub track_subdomains_enabled: Option<bool>,
    pub default_scenario_id: Option<i64>,
    pub cookie_lifetime: Option<u32>,
    pub campaign_lifetime: Option<u32>,
    pub sales_enabled: Option<bool>,
    pub second_communication_period: Option<u32>,
    pub services_enabled: Option<bool>,
    pub replacement_dynamical_block_enabled: Option<bool>,
    pub widget_link: Option<Value>,
    pub show_visitor_id: Option<Value>,
}

/// New employee; `last_name` and at least one phone number are mandatory
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewEmployee {
    pub last_name: String,
    pub phone_numbers: Vec<Value>,
    pub first_name: Option<String>,
    pub patronymic: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub allowed_in_call_types: Option<Vec<String>>,
    pub allowed_out_call_types: Option<Vec<String>>,
    pub email: Option<String>,
    pub call_recording: Option<CallRecording>,
    pub schedule_id: Option<i64>,
    pub calls_available: Option<bool>,
    pub extension: Option<Value>,
    pub operator: Option<Value>,
}

/// Partial employee update
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeUpdate {
    pub last_name: Option<String>,
    pub phone_numbers: Option<Vec<Value>>,
    pub first_name: Option<String>,
    pub patronymic: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub allowed_in_call_types: Option<Vec<String>>,
    pub allowed_out_call_types: Option<Vec<String>>,
    pub email: Option<String>,
    pub call_recording: Option<CallRecording>,
    pub schedule_id: Option<i64>,
    pub calls_available: Option<bool>,
    pub extension: Option<Value>,
    pub operator: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeGroupPayload {
    pub name: Option<String>,
    pub members: Option<Vec<Value>>,
    pub group_phone_number: Option<String>,
    pub queue_enabled: Option<bool>,
    pub channels_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactPayload {
    pub last_name: String,
    pub phone_numbers: Vec<String>,
    pub first_name: Option<String>,
    pub patronymic: Option<String>,
    pub emails: Option<Vec<String>>,
    pub personal_manager_id: Option<i64>,
    pub organization_id: Option<i64>,
    pub groups: Option<Vec<i64>>,
}
