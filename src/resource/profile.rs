//! AWS CLI profiles.

use crate::resource::optional;
use crate::ui::schema::{Column, DetailField, Schema, StyleTag};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const COL_WIDTH_NAME: usize = 30;
const COL_WIDTH_REGION: usize = 20;
const COL_WIDTH_SOURCE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// From the config file, if set there.
    #[serde(default)]
    pub region: String,
    /// `credentials` or `config`.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub active: bool,
}

impl Profile {
    /// Sets `active` on the profile named `name` and clears it elsewhere.
    pub fn mark_active(profiles: &mut [Profile], name: &str) {
        for profile in profiles {
            profile.active = profile.name == name;
        }
    }
}

pub struct ProfileSchema {
    columns: Vec<Column<Profile>>,
}

impl ProfileSchema {
    pub fn new() -> Self {
        let mut name = Column::flexible("Name", StyleTag::Name, |p: &Profile| p.name.clone());
        name.min_width = COL_WIDTH_NAME;

        Self {
            columns: vec![
                name,
                Column::fixed("Region", COL_WIDTH_REGION, StyleTag::Zone, |p: &Profile| {
                    optional(&p.region)
                }),
                Column::fixed("Source", COL_WIDTH_SOURCE, StyleTag::Muted, |p: &Profile| {
                    p.source.clone()
                }),
            ],
        }
    }
}

impl Default for ProfileSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema for ProfileSchema {
    type Item = Profile;

    fn noun(&self) -> &str {
        "profiles"
    }

    fn title(&self) -> &str {
        "Profile Details"
    }

    fn columns(&self) -> &[Column<Profile>] {
        &self.columns
    }

    fn search_fields<'a>(&self, profile: &'a Profile) -> Vec<Cow<'a, str>> {
        vec![
            Cow::Borrowed(profile.name.as_str()),
            Cow::Borrowed(profile.region.as_str()),
        ]
    }

    fn detail_fields(&self, profile: &Profile) -> Vec<DetailField> {
        vec![
            DetailField::new("Profile:", profile.name.as_str(), StyleTag::Name),
            DetailField::new("Region:", optional(&profile.region), StyleTag::Zone),
            DetailField::new("Source:", optional(&profile.source), StyleTag::Muted),
        ]
    }

    fn detail_rows(&self) -> usize {
        3
    }

    fn is_current(&self, profile: &Profile) -> bool {
        profile.active
    }
}
