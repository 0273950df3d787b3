//! Auto Scaling groups.

use crate::resource::{optional, widest};
use crate::ui::schema::{Column, DetailField, Schema, StyleTag};
use crate::ui::theme::with_indicator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Names narrower than this still get this much room.
const MIN_NAME_WIDTH: usize = 30;
/// Fits `"X/Y/Z"` desired/min/max.
const COL_WIDTH_CAPACITY: usize = 12;
const COL_WIDTH_COUNT: usize = 10;
/// Fits `"Desired/Min/Max:"`.
const DETAIL_LABEL_WIDTH: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingGroup {
    pub name: String,
    #[serde(default)]
    pub arn: String,
    #[serde(default)]
    pub launch_template: String,
    #[serde(default)]
    pub desired_capacity: u32,
    #[serde(default)]
    pub min_size: u32,
    #[serde(default)]
    pub max_size: u32,
    #[serde(default)]
    pub instance_count: u32,
    #[serde(default)]
    pub healthy_count: u32,
    #[serde(default)]
    pub unhealthy_count: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub azs: Vec<String>,
}

impl ScalingGroup {
    pub fn capacity(&self) -> String {
        format!(
            "{}/{}/{}",
            self.desired_capacity, self.min_size, self.max_size
        )
    }

    /// `InService` when the API left the status empty.
    pub fn status_or_default(&self) -> &str {
        if self.status.is_empty() {
            "InService"
        } else {
            &self.status
        }
    }
}

pub struct ScalingGroupSchema {
    columns: Vec<Column<ScalingGroup>>,
}

impl ScalingGroupSchema {
    /// The name column is sized to the longest group name, so long
    /// environment-prefixed names are not cut at normal terminal widths.
    pub fn for_items(groups: &[ScalingGroup]) -> Self {
        let name_width = widest(groups.iter().map(|g| g.name.as_str()), MIN_NAME_WIDTH);
        let mut name = Column::flexible("Name", StyleTag::Name, |g: &ScalingGroup| g.name.clone());
        name.min_width = name_width;

        Self {
            columns: vec![
                name,
                Column::fixed("Capacity", COL_WIDTH_CAPACITY, StyleTag::Kind, |g: &ScalingGroup| {
                    g.capacity()
                }),
                Column::fixed("Instances", COL_WIDTH_COUNT, StyleTag::Muted, |g: &ScalingGroup| {
                    format!("{} inst", g.instance_count)
                }),
            ],
        }
    }
}

impl Schema for ScalingGroupSchema {
    type Item = ScalingGroup;

    fn noun(&self) -> &str {
        "ASGs"
    }

    fn title(&self) -> &str {
        "ASG Details"
    }

    fn columns(&self) -> &[Column<ScalingGroup>] {
        &self.columns
    }

    fn search_fields<'a>(&self, group: &'a ScalingGroup) -> Vec<Cow<'a, str>> {
        vec![Cow::Borrowed(group.name.as_str())]
    }

    fn detail_fields(&self, group: &ScalingGroup) -> Vec<DetailField> {
        vec![
            DetailField::new("Name:", group.name.as_str(), StyleTag::Name),
            DetailField::new(
                "Launch Template:",
                optional(&group.launch_template),
                StyleTag::Muted,
            ),
            DetailField::new(
                "Desired/Min/Max:",
                format!(
                    "{} / {} / {}",
                    group.desired_capacity, group.min_size, group.max_size
                ),
                StyleTag::Kind,
            ),
            DetailField::new(
                "Running:",
                format!("{} instances", group.instance_count),
                StyleTag::Plain,
            ),
            DetailField::new(
                "Healthy:",
                format!("{} / {}", group.healthy_count, group.instance_count),
                StyleTag::Plain,
            ),
            DetailField::new(
                "Status:",
                with_indicator(group.status_or_default()),
                StyleTag::State,
            ),
            DetailField::new("AZs:", optional(&group.azs.join(", ")), StyleTag::Zone),
        ]
    }

    fn detail_rows(&self) -> usize {
        7
    }

    fn detail_label_width(&self) -> usize {
        DETAIL_LABEL_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> ScalingGroup {
        ScalingGroup {
            name: name.to_string(),
            arn: String::new(),
            launch_template: String::new(),
            desired_capacity: 3,
            min_size: 1,
            max_size: 6,
            instance_count: 3,
            healthy_count: 2,
            unhealthy_count: 1,
            status: String::new(),
            created_time: None,
            azs: vec!["us-east-1a".to_string(), "us-east-1b".to_string()],
        }
    }

    #[test]
    fn test_name_column_fits_longest_name() {
        let long = "production-payments-api-blue-green-canary-asg";
        let schema = ScalingGroupSchema::for_items(&[group("short"), group(long)]);
        assert_eq!(schema.columns()[0].min_width, long.len());
    }

    #[test]
    fn test_name_column_floor() {
        let schema = ScalingGroupSchema::for_items(&[group("web")]);
        assert_eq!(schema.columns()[0].min_width, MIN_NAME_WIDTH);
    }

    #[test]
    fn test_detail_values() {
        let g = group("web");
        let fields = ScalingGroupSchema::for_items(std::slice::from_ref(&g)).detail_fields(&g);
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[2].value, "3 / 1 / 6");
        assert_eq!(fields[4].value, "2 / 3");
        assert_eq!(fields[5].value, "● InService");
        assert_eq!(fields[6].value, "us-east-1a, us-east-1b");
        assert_eq!(fields[1].value, "-");
    }
}
