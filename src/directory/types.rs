//! Directory records as served by the back-office API
//!
//! Every string field defaults to empty so a record missing a field is still
//! usable; empty strings never match during lookups.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branch {
    pub branch_name: String,
    pub branch_code: String,
    pub email: String,
    pub address: String,
}

impl Branch {
    /// Display label used in option lists, e.g. `Pune (PN01)`
    pub fn label(&self) -> String {
        format_branch_label(&self.branch_name, &self.branch_code)
    }
}

pub fn format_branch_label(name: &str, code: &str) -> String {
    format!("{} ({})", name, code)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Department {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourierStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
    Returned,
}

impl fmt::Display for CourierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CourierStatus::Pending => "pending",
            CourierStatus::InTransit => "in transit",
            CourierStatus::Delivered => "delivered",
            CourierStatus::Returned => "returned",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Courier {
    pub tracking_number: String,
    pub sender: String,
    pub department: String,
    pub destination: String,
    pub destination_email: String,
    pub description: String,
    pub status: CourierStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Everything the courier form needs from the back-office
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Directory {
    pub branches: Vec<Branch>,
    pub users: Vec<UserSummary>,
    pub departments: Vec<Department>,
    pub couriers: Vec<Courier>,
}
