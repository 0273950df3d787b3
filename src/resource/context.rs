//! Named provider contexts (provider + credentials + region).

use crate::resource::{optional, widest};
use crate::ui::schema::{Column, DetailField, Schema, StyleTag};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Width of `"AWS"`.
const MIN_PROVIDER_WIDTH: usize = 3;
const MIN_CREDENTIAL_WIDTH: usize = 10;
const MIN_REGION_WIDTH: usize = 10;

/// A context as stored in the cumulus config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub provider: String,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub region: String,
}

/// A context plus its name and whether it is the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub name: String,
    #[serde(flatten)]
    pub context: Context,
    #[serde(default)]
    pub current: bool,
}

impl ContextEntry {
    /// Entries sorted by name, with `current` marking the active context.
    pub fn from_map(contexts: BTreeMap<String, Context>, current: &str) -> Vec<Self> {
        contexts
            .into_iter()
            .map(|(name, context)| Self {
                current: name == current,
                name,
                context,
            })
            .collect()
    }

    /// GCP project if set, otherwise the AWS profile.
    pub fn credential(&self) -> &str {
        if self.context.project.is_empty() {
            &self.context.profile
        } else {
            &self.context.project
        }
    }

    pub fn credential_label(&self) -> &'static str {
        if self.context.project.is_empty() {
            "Profile:"
        } else {
            "Project:"
        }
    }

    pub fn provider_label(&self) -> String {
        self.context.provider.to_uppercase()
    }
}

pub struct ContextSchema {
    columns: Vec<Column<ContextEntry>>,
}

impl ContextSchema {
    /// Provider, credential and region columns are as wide as their widest
    /// value; the name takes the rest.
    pub fn for_items(entries: &[ContextEntry]) -> Self {
        let providers: Vec<String> = entries.iter().map(ContextEntry::provider_label).collect();
        let regions: Vec<String> = entries.iter().map(|e| optional(&e.context.region)).collect();
        let provider_width = widest(providers.iter().map(String::as_str), MIN_PROVIDER_WIDTH);
        let credential_width = widest(
            entries.iter().map(ContextEntry::credential),
            MIN_CREDENTIAL_WIDTH,
        );
        let region_width = widest(regions.iter().map(String::as_str), MIN_REGION_WIDTH);

        Self {
            columns: vec![
                Column::flexible("Name", StyleTag::Name, |e: &ContextEntry| e.name.clone()),
                Column::fixed(
                    "Provider",
                    provider_width,
                    StyleTag::Provider,
                    |e: &ContextEntry| e.provider_label(),
                ),
                Column::fixed(
                    "Credential",
                    credential_width,
                    StyleTag::Muted,
                    |e: &ContextEntry| e.credential().to_string(),
                ),
                Column::fixed("Region", region_width, StyleTag::Zone, |e: &ContextEntry| {
                    optional(&e.context.region)
                }),
            ],
        }
    }
}

impl Schema for ContextSchema {
    type Item = ContextEntry;

    fn noun(&self) -> &str {
        "contexts"
    }

    fn title(&self) -> &str {
        "Context Details"
    }

    fn columns(&self) -> &[Column<ContextEntry>] {
        &self.columns
    }

    fn search_fields<'a>(&self, entry: &'a ContextEntry) -> Vec<Cow<'a, str>> {
        vec![Cow::Borrowed(entry.name.as_str())]
    }

    fn detail_fields(&self, entry: &ContextEntry) -> Vec<DetailField> {
        vec![
            DetailField::new("Context:", entry.name.as_str(), StyleTag::Name),
            DetailField::new("Provider:", entry.provider_label(), StyleTag::Provider),
            DetailField::new(entry.credential_label(), entry.credential(), StyleTag::Muted),
            DetailField::new("Region:", optional(&entry.context.region), StyleTag::Zone),
        ]
    }

    fn detail_rows(&self) -> usize {
        4
    }

    fn is_current(&self, entry: &ContextEntry) -> bool {
        entry.current
    }
}
