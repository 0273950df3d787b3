//! Elastic Load Balancers (ALB, NLB, GWLB, classic).

use crate::resource::{format_time, optional};
use crate::ui::schema::{Column, DetailField, Schema, StyleTag};
use crate::ui::theme::with_indicator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const COL_WIDTH_NAME: usize = 30;
const COL_WIDTH_TYPE: usize = 12;
const COL_WIDTH_STATE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub name: String,
    #[serde(default)]
    pub arn: String,
    #[serde(default)]
    pub dns_name: String,
    /// `application`, `network`, `gateway` or `classic`.
    #[serde(rename = "type", default)]
    pub lb_type: String,
    /// `internet-facing` or `internal`.
    #[serde(default)]
    pub scheme: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub vpc_id: String,
    #[serde(default)]
    pub azs: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

pub struct LoadBalancerSchema {
    columns: Vec<Column<LoadBalancer>>,
}

impl LoadBalancerSchema {
    pub fn new() -> Self {
        let mut name = Column::flexible("Name", StyleTag::Name, |lb: &LoadBalancer| {
            lb.name.clone()
        });
        name.min_width = COL_WIDTH_NAME;

        Self {
            columns: vec![
                name,
                Column::fixed("Type", COL_WIDTH_TYPE, StyleTag::Kind, |lb: &LoadBalancer| {
                    lb.lb_type.clone()
                }),
                Column::fixed("State", COL_WIDTH_STATE, StyleTag::State, |lb: &LoadBalancer| {
                    lb.state.clone()
                }),
            ],
        }
    }
}

impl Default for LoadBalancerSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema for LoadBalancerSchema {
    type Item = LoadBalancer;

    fn noun(&self) -> &str {
        "load balancers"
    }

    fn title(&self) -> &str {
        "Load Balancer Details"
    }

    fn columns(&self) -> &[Column<LoadBalancer>] {
        &self.columns
    }

    fn search_fields<'a>(&self, lb: &'a LoadBalancer) -> Vec<Cow<'a, str>> {
        vec![
            Cow::Borrowed(lb.name.as_str()),
            Cow::Borrowed(lb.dns_name.as_str()),
            Cow::Borrowed(lb.lb_type.as_str()),
        ]
    }

    fn detail_fields(&self, lb: &LoadBalancer) -> Vec<DetailField> {
        vec![
            DetailField::new("Name:", lb.name.as_str(), StyleTag::Name),
            DetailField::new("Type:", lb.lb_type.as_str(), StyleTag::Kind),
            DetailField::new("Scheme:", optional(&lb.scheme), StyleTag::Plain),
            DetailField::new("State:", with_indicator(&lb.state), StyleTag::State),
            DetailField::new("DNS:", optional(&lb.dns_name), StyleTag::Address),
            DetailField::new("VPC:", optional(&lb.vpc_id), StyleTag::Id),
            DetailField::new("AZs:", optional(&lb.azs.join(", ")), StyleTag::Zone),
            DetailField::new(
                "Created:",
                format_time(lb.created_at.as_ref()),
                StyleTag::Muted,
            ),
        ]
    }

    fn detail_rows(&self) -> usize {
        8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_renamed() {
        let json = r#"{"name": "api", "type": "application", "state": "active"}"#;
        let lb: LoadBalancer = serde_json::from_str(json).expect("deserialize");
        assert_eq!(lb.lb_type, "application");
    }

    #[test]
    fn test_dns_is_searchable() {
        let json = r#"{"name": "api", "dns_name": "api-123.elb.amazonaws.com"}"#;
        let lb: LoadBalancer = serde_json::from_str(json).expect("deserialize");
        let schema = LoadBalancerSchema::new();
        assert!(schema
            .search_fields(&lb)
            .iter()
            .any(|f| f.contains("elb.amazonaws")));
    }

    #[test]
    fn test_name_column_floor() {
        let schema = LoadBalancerSchema::new();
        assert!(schema.columns()[0].flexible);
        assert_eq!(schema.columns()[0].min_width, COL_WIDTH_NAME);
    }
}
