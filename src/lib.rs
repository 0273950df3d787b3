//! Cumulus picker - interactive resource selection for cloud CLIs
//!
//! This library provides a generic, schema-driven terminal selector (search,
//! scroll, detail panel, keyboard actions) and the schemas for the cloud
//! resources cumulus lists (VMs, scaling groups, VPCs, load balancers,
//! contexts, profiles).

pub mod resource;
pub mod ui;
