//! VPCs.

use crate::resource::{format_bool, optional};
use crate::ui::schema::{Column, DetailField, Schema, StyleTag};
use crate::ui::theme::with_indicator;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const COL_WIDTH_ID: usize = 21;
const COL_WIDTH_CIDR: usize = 18;
const COL_WIDTH_STATE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cidr: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub owner_id: String,
}

pub struct NetworkSchema {
    columns: Vec<Column<Network>>,
}

impl NetworkSchema {
    pub fn new() -> Self {
        Self {
            columns: vec![
                Column::fixed("ID", COL_WIDTH_ID, StyleTag::Id, |n: &Network| n.id.clone()),
                Column::fixed("CIDR", COL_WIDTH_CIDR, StyleTag::Address, |n: &Network| {
                    n.cidr.clone()
                }),
                Column::fixed("State", COL_WIDTH_STATE, StyleTag::State, |n: &Network| {
                    n.state.clone()
                }),
                Column::flexible("Name", StyleTag::Name, |n: &Network| {
                    if n.is_default && n.name.is_empty() {
                        "(default)".to_string()
                    } else {
                        n.name.clone()
                    }
                }),
            ],
        }
    }
}

impl Default for NetworkSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema for NetworkSchema {
    type Item = Network;

    fn noun(&self) -> &str {
        "VPCs"
    }

    fn title(&self) -> &str {
        "VPC Details"
    }

    fn columns(&self) -> &[Column<Network>] {
        &self.columns
    }

    fn search_fields<'a>(&self, network: &'a Network) -> Vec<Cow<'a, str>> {
        vec![
            Cow::Borrowed(network.name.as_str()),
            Cow::Borrowed(network.id.as_str()),
            Cow::Borrowed(network.cidr.as_str()),
        ]
    }

    fn detail_fields(&self, network: &Network) -> Vec<DetailField> {
        vec![
            DetailField::new("ID:", network.id.as_str(), StyleTag::Id),
            DetailField::new("Name:", optional(&network.name), StyleTag::Name),
            DetailField::new("CIDR:", network.cidr.as_str(), StyleTag::Address),
            DetailField::new("State:", with_indicator(&network.state), StyleTag::State),
            DetailField::new("Default:", format_bool(network.is_default), StyleTag::Plain),
            DetailField::new("Owner:", optional(&network.owner_id), StyleTag::Muted),
        ]
    }

    fn detail_rows(&self) -> usize {
        6
    }
}
