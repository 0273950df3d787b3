//! # Resource Module
//!
//! Cloud resource records and the [`Schema`](crate::ui::schema::Schema) that
//! presents each of them in the selector.
//!
//! | Resource | Record | Schema | Extra actions |
//! |----------|--------|--------|---------------|
//! | Virtual machine | [`Vm`] | [`VmSchema`] | `^S` start, `^X` stop |
//! | Auto Scaling group | [`ScalingGroup`] | [`ScalingGroupSchema`] | |
//! | VPC | [`Network`] | [`NetworkSchema`] | |
//! | Load balancer | [`LoadBalancer`] | [`LoadBalancerSchema`] | |
//! | Context | [`ContextEntry`] | [`ContextSchema`] | |
//! | Profile | [`Profile`] | [`ProfileSchema`] | |
//! | Instance | [`Instance`] | [`InstanceSchema`] | |
//!
//! Records are plain serde structs; they come from the cloud listing layer
//! (or a JSON file) fully materialized.

pub mod asg;
pub mod context;
pub mod instance;
pub mod lb;
pub mod profile;
pub mod vm;
pub mod vpc;

pub use asg::{ScalingGroup, ScalingGroupSchema};
pub use context::{ContextEntry, ContextSchema};
pub use instance::{Instance, InstanceSchema};
pub use lb::{LoadBalancer, LoadBalancerSchema};
pub use profile::{Profile, ProfileSchema};
pub use vm::{Vm, VmSchema, VmState, ACTION_START, ACTION_STOP};
pub use vpc::{Network, NetworkSchema};

use chrono::{DateTime, Utc};

/// Shown for empty optional values.
pub const NONE_MARK: &str = "-";

/// `value`, or `"-"` when it is empty.
pub fn optional(value: &str) -> String {
    if value.is_empty() {
        NONE_MARK.to_string()
    } else {
        value.to_string()
    }
}

pub fn format_time(time: Option<&DateTime<Utc>>) -> String {
    time.map_or_else(
        || NONE_MARK.to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

pub fn format_bool(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

/// Widest display width among `values`, but never below `floor`.
pub(crate) fn widest<'a>(values: impl IntoIterator<Item = &'a str>, floor: usize) -> usize {
    values
        .into_iter()
        .map(crate::ui::text::display_width)
        .fold(floor, usize::max)
}
