//! Virtual machines (EC2 instances, GCE VMs).

use crate::resource::{format_time, optional};
use crate::ui::schema::{ActionBinding, Column, DetailField, Schema, StyleTag};
use crate::ui::theme::with_indicator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

pub const ACTION_START: &str = "start";
pub const ACTION_STOP: &str = "stop";

const COL_WIDTH_ID: usize = 21;
const COL_WIDTH_STATE: usize = 10;
const COL_WIDTH_TYPE: usize = 12;
const COL_WIDTH_ZONE: usize = 16;

const VM_ACTIONS: [ActionBinding; 2] = [
    ActionBinding::ctrl('s', ACTION_START, "^S:start"),
    ActionBinding::ctrl('x', ACTION_STOP, "^X:stop"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmState {
    Running,
    Stopped,
    Pending,
    Stopping,
    #[serde(other)]
    Unknown,
}

impl VmState {
    pub fn as_str(self) -> &'static str {
        match self {
            VmState::Running => "running",
            VmState::Stopped => "stopped",
            VmState::Pending => "pending",
            VmState::Stopping => "stopping",
            VmState::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vm {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub state: VmState,
    #[serde(default)]
    pub private_ip: String,
    #[serde(default)]
    pub public_ip: String,
    #[serde(rename = "type", default)]
    pub machine_type: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default)]
    pub launched_at: Option<DateTime<Utc>>,
    /// `aws` or `gcp`.
    #[serde(default)]
    pub provider: String,
    /// Auto Scaling group (AWS) or instance group (GCP).
    #[serde(default)]
    pub asg: String,
}

pub struct VmSchema {
    columns: Vec<Column<Vm>>,
}

impl VmSchema {
    pub fn new() -> Self {
        Self {
            columns: vec![
                Column::fixed("ID", COL_WIDTH_ID, StyleTag::Id, |vm: &Vm| vm.id.clone()),
                Column::fixed("State", COL_WIDTH_STATE, StyleTag::State, |vm: &Vm| {
                    vm.state.as_str().to_string()
                }),
                Column::fixed("Type", COL_WIDTH_TYPE, StyleTag::Kind, |vm: &Vm| {
                    vm.machine_type.clone()
                }),
                Column::fixed("Zone", COL_WIDTH_ZONE, StyleTag::Zone, |vm: &Vm| vm.zone.clone()),
                Column::flexible("Name", StyleTag::Name, |vm: &Vm| vm.name.clone()),
            ],
        }
    }
}

impl Default for VmSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema for VmSchema {
    type Item = Vm;

    fn noun(&self) -> &str {
        "VMs"
    }

    fn title(&self) -> &str {
        "VM Details"
    }

    fn columns(&self) -> &[Column<Vm>] {
        &self.columns
    }

    fn search_fields<'a>(&self, vm: &'a Vm) -> Vec<Cow<'a, str>> {
        vec![
            Cow::Borrowed(vm.name.as_str()),
            Cow::Borrowed(vm.id.as_str()),
            Cow::Borrowed(vm.private_ip.as_str()),
            Cow::Borrowed(vm.machine_type.as_str()),
            Cow::Borrowed(vm.zone.as_str()),
        ]
    }

    fn detail_fields(&self, vm: &Vm) -> Vec<DetailField> {
        let group_label = if vm.provider == "gcp" { "IG:" } else { "ASG:" };
        vec![
            DetailField::new("ID:", vm.id.as_str(), StyleTag::Id),
            DetailField::new("Name:", vm.name.as_str(), StyleTag::Name),
            DetailField::new("State:", with_indicator(vm.state.as_str()), StyleTag::State),
            DetailField::new("Type:", vm.machine_type.as_str(), StyleTag::Kind),
            DetailField::new("Zone:", vm.zone.as_str(), StyleTag::Zone),
            DetailField::new("Private IP:", vm.private_ip.as_str(), StyleTag::Address),
            DetailField::new("Public IP:", optional(&vm.public_ip), StyleTag::Address),
            DetailField::new(group_label, optional(&vm.asg), StyleTag::Group),
            DetailField::new(
                "Launched:",
                format_time(vm.launched_at.as_ref()),
                StyleTag::Muted,
            ),
            DetailField::new("Provider:", vm.provider.as_str(), StyleTag::Provider),
        ]
    }

    fn detail_rows(&self) -> usize {
        10
    }

    fn actions(&self) -> &[ActionBinding] {
        &VM_ACTIONS
    }

    fn default_hint(&self) -> &str {
        "connect"
    }
}
