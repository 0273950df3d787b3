//! Compute instances as returned by the SSH/SSM connect listing.

use crate::resource::{format_time, optional};
use crate::ui::schema::{Column, DetailField, Schema, StyleTag};
use crate::ui::theme::with_indicator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const COL_WIDTH_ID: usize = 21;
const COL_WIDTH_IP: usize = 15;
const COL_WIDTH_STATE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub private_ip: String,
    #[serde(default)]
    pub public_ip: String,
    #[serde(default)]
    pub state: String,
    #[serde(rename = "type", default)]
    pub instance_type: String,
    #[serde(default)]
    pub az: String,
    #[serde(default)]
    pub asg: String,
    #[serde(default)]
    pub launch_time: Option<DateTime<Utc>>,
    /// `aws` or `gcp`.
    #[serde(default)]
    pub cloud: String,
}

pub struct InstanceSchema {
    columns: Vec<Column<Instance>>,
}

impl InstanceSchema {
    pub fn new() -> Self {
        Self {
            columns: vec![
                Column::fixed("ID", COL_WIDTH_ID, StyleTag::Id, |i: &Instance| i.id.clone()),
                Column::fixed("Private IP", COL_WIDTH_IP, StyleTag::Address, |i: &Instance| {
                    i.private_ip.clone()
                }),
                Column::fixed("State", COL_WIDTH_STATE, StyleTag::State, |i: &Instance| {
                    i.state.clone()
                }),
                Column::flexible("Name", StyleTag::Name, |i: &Instance| i.name.clone()),
            ],
        }
    }
}

impl Default for InstanceSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema for InstanceSchema {
    type Item = Instance;

    fn noun(&self) -> &str {
        "instances"
    }

    fn title(&self) -> &str {
        "Instance Details"
    }

    fn columns(&self) -> &[Column<Instance>] {
        &self.columns
    }

    fn search_fields<'a>(&self, instance: &'a Instance) -> Vec<Cow<'a, str>> {
        vec![
            Cow::Borrowed(instance.name.as_str()),
            Cow::Borrowed(instance.id.as_str()),
            Cow::Borrowed(instance.private_ip.as_str()),
            Cow::Borrowed(instance.asg.as_str()),
        ]
    }

    fn detail_fields(&self, instance: &Instance) -> Vec<DetailField> {
        vec![
            DetailField::new("ID:", instance.id.as_str(), StyleTag::Id),
            DetailField::new("Name:", optional(&instance.name), StyleTag::Name),
            DetailField::new("State:", with_indicator(&instance.state), StyleTag::State),
            DetailField::new("Type:", optional(&instance.instance_type), StyleTag::Kind),
            DetailField::new("AZ:", optional(&instance.az), StyleTag::Zone),
            DetailField::new("Private IP:", optional(&instance.private_ip), StyleTag::Address),
            DetailField::new("Public IP:", optional(&instance.public_ip), StyleTag::Address),
            DetailField::new("ASG:", optional(&instance.asg), StyleTag::Group),
            DetailField::new(
                "Launched:",
                format_time(instance.launch_time.as_ref()),
                StyleTag::Muted,
            ),
            DetailField::new("Cloud:", optional(&instance.cloud), StyleTag::Provider),
        ]
    }

    fn detail_rows(&self) -> usize {
        10
    }

    fn default_hint(&self) -> &str {
        "connect"
    }
}
