//! Resource schema tests
//!
//! Each resource type is loaded from JSON the way the binary loads it, then
//! searched and rendered through the real selector.

use cumulus::resource::{
    ContextEntry, ContextSchema, Instance, InstanceSchema, LoadBalancer, LoadBalancerSchema,
    Network, NetworkSchema, Profile, ProfileSchema, ScalingGroup, ScalingGroupSchema, Vm,
    VmSchema,
};
use cumulus::ui::event::SelectorEvent;
use cumulus::ui::layout::Dimensions;
use cumulus::ui::render::render;
use cumulus::ui::schema::Schema;
use cumulus::ui::theme::Theme;
use cumulus::ui::App;
use ratatui::text::Line;

const VMS: &str = r#"[
    {"id": "i-0a1b2c3d4e5f60001", "name": "web-01", "state": "running", "private_ip": "10.0.1.11",
     "type": "t3.micro", "zone": "us-east-1a", "provider": "aws", "asg": "web-asg",
     "launched_at": "2025-01-02T03:04:05Z"},
    {"id": "i-0a1b2c3d4e5f60002", "name": "db-01", "state": "stopped", "private_ip": "10.0.2.21",
     "type": "r6g.large", "zone": "us-east-1b", "provider": "aws"},
    {"id": "4419923", "name": "batch-worker", "state": "pending", "private_ip": "10.128.0.5",
     "type": "e2-standard-4", "zone": "europe-west1-b", "provider": "gcp"}
]"#;

const GROUPS: &str = r#"[
    {"name": "prod-payments-api-blue-green-deployment-group", "desired_capacity": 4,
     "min_size": 2, "max_size": 8, "instance_count": 4, "healthy_count": 4,
     "azs": ["us-east-1a", "us-east-1b"]},
    {"name": "staging-web", "desired_capacity": 1, "min_size": 1, "max_size": 2,
     "instance_count": 1, "healthy_count": 1, "status": "Updating"}
]"#;

const NETWORKS: &str = r#"[
    {"id": "vpc-0123456789abcdef0", "name": "main", "cidr": "10.0.0.0/16", "state": "available"},
    {"id": "vpc-0fedcba987654321f", "cidr": "172.31.0.0/16", "state": "available", "is_default": true}
]"#;

const LOAD_BALANCERS: &str = r#"[
    {"name": "api-public", "type": "application", "scheme": "internet-facing",
     "state": "active", "dns_name": "api-public-1234.us-east-1.elb.amazonaws.com"},
    {"name": "grpc-internal", "type": "network", "scheme": "internal", "state": "provisioning"}
]"#;

const CONTEXTS: &str = r#"[
    {"name": "dev", "provider": "gcp", "project": "dev-project-4711", "region": "europe-west1"},
    {"name": "prod", "provider": "aws", "profile": "prod-admin", "region": "us-east-1", "current": true},
    {"name": "staging", "provider": "aws", "profile": "staging"}
]"#;

const PROFILES: &str = r#"[
    {"name": "default", "source": "credentials"},
    {"name": "prod-admin", "region": "us-east-1", "source": "config", "active": true}
]"#;

const INSTANCES: &str = r#"[
    {"id": "i-01", "name": "bastion", "private_ip": "10.0.0.5", "state": "running",
     "type": "t3.nano", "az": "us-east-1a", "cloud": "aws"},
    {"id": "i-02", "name": "worker", "private_ip": "10.0.3.9", "state": "running",
     "asg": "workers-asg", "cloud": "aws"}
]"#;

fn text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn frame<S: Schema>(app: &App<S>) -> Vec<String> {
    render(app, Theme::default_theme()).iter().map(text).collect()
}

/// Every line of every frame is exactly as wide as the box.
fn assert_frames_rectangular<S: Schema>(app: &mut App<S>) {
    for width in [40, 80, 100, 120, 200] {
        app.handle(SelectorEvent::Resize(width));
        let outer = app.layout().outer_width();
        for line in render(app, Theme::default_theme()) {
            assert_eq!(line.width(), outer, "{} at width {width}", app.schema().noun());
        }
    }
}

fn search<S: Schema>(app: &mut App<S>, query: &str) {
    for c in query.chars() {
        app.handle(SelectorEvent::Char(c));
    }
}

fn clear<S: Schema>(app: &mut App<S>) {
    while !app.query().is_empty() {
        app.handle(SelectorEvent::Backspace);
    }
}

#[test]
fn test_vm_selector() {
    let items: Vec<Vm> = serde_json::from_str(VMS).expect("vms");
    let mut app = App::new(items, VmSchema::new(), Dimensions::default()).expect("app");
    assert_frames_rectangular(&mut app);

    search(&mut app, "10.0.2");
    assert_eq!(app.selected().map(|vm| vm.name.as_str()), Some("db-01"));
    clear(&mut app);

    search(&mut app, "E2-STANDARD");
    assert_eq!(app.filtered_len(), 1);
    let lines = frame(&app);
    assert!(lines.iter().any(|l| l.contains("IG:")));
    assert!(lines.iter().any(|l| l.contains("◐ pending")));
    clear(&mut app);

    let lines = frame(&app);
    assert!(lines.iter().any(|l| l.contains("2025-01-02 03:04:05")));
    assert!(lines.iter().any(|l| l.contains("ASG:") && l.contains("web-asg")));
}

#[test]
fn test_scaling_group_selector() {
    let items: Vec<ScalingGroup> = serde_json::from_str(GROUPS).expect("groups");
    let schema = ScalingGroupSchema::for_items(&items);
    let mut app = App::new(items, schema, Dimensions::default()).expect("app");
    assert_frames_rectangular(&mut app);

    // The long name is shown in full even on a narrow terminal.
    app.handle(SelectorEvent::Resize(60));
    let lines = frame(&app);
    assert!(lines[3].contains("prod-payments-api-blue-green-deployment-group"));
    assert!(lines[3].contains("4/2/8"));
    assert!(lines.iter().any(|l| l.contains("Desired/Min/Max:  4 / 2 / 8")));

    search(&mut app, "staging");
    assert!(frame(&app).iter().any(|l| l.contains("◐ Updating")));
}

#[test]
fn test_network_selector() {
    let items: Vec<Network> = serde_json::from_str(NETWORKS).expect("networks");
    let mut app = App::new(items, NetworkSchema::new(), Dimensions::default()).expect("app");
    assert_frames_rectangular(&mut app);

    search(&mut app, "172.31");
    assert_eq!(app.filtered_len(), 1);
    assert!(frame(&app).iter().any(|l| l.contains("(default)")));
}

#[test]
fn test_load_balancer_selector() {
    let items: Vec<LoadBalancer> = serde_json::from_str(LOAD_BALANCERS).expect("lbs");
    let mut app =
        App::new(items, LoadBalancerSchema::new(), Dimensions::default()).expect("app");
    assert_frames_rectangular(&mut app);

    search(&mut app, "network");
    assert_eq!(app.selected().map(|lb| lb.name.as_str()), Some("grpc-internal"));
    let lines = frame(&app);
    assert!(!lines.iter().any(|l| l.contains("No load balancers found")));
    assert!(lines.last().is_some_and(|l| l.contains("1/2 load balancers")));
}

#[test]
fn test_context_selector_marks_current() {
    let items: Vec<ContextEntry> = serde_json::from_str(CONTEXTS).expect("contexts");
    let schema = ContextSchema::for_items(&items);
    let mut app = App::new(items, schema, Dimensions::default()).expect("app");
    assert_frames_rectangular(&mut app);

    // Cursor starts on the current context.
    assert_eq!(app.cursor(), 1);
    let lines = frame(&app);
    assert!(lines[4].starts_with("│ > prod"));
    assert!(lines.iter().any(|l| l.contains("Profile:") && l.contains("prod-admin")));

    // Once the cursor moves away the current row keeps its marker.
    app.handle(SelectorEvent::MoveUp);
    let lines = frame(&app);
    assert!(lines[3].starts_with("│ > dev"));
    assert!(lines[4].starts_with("│ ● prod"));
    assert!(lines.iter().any(|l| l.contains("Project:") && l.contains("dev-project-4711")));
    assert!(lines.iter().any(|l| l.contains("Provider:") && l.contains("GCP")));
}

#[test]
fn test_profile_selector() {
    let items: Vec<Profile> = serde_json::from_str(PROFILES).expect("profiles");
    let mut app = App::new(items, ProfileSchema::new(), Dimensions::default()).expect("app");
    assert_frames_rectangular(&mut app);
    assert_eq!(app.selected().map(|p| p.name.as_str()), Some("prod-admin"));

    search(&mut app, "us-east");
    assert_eq!(app.filtered_len(), 1);
}

#[test]
fn test_instance_selector() {
    let items: Vec<Instance> = serde_json::from_str(INSTANCES).expect("instances");
    let mut app = App::new(items, InstanceSchema::new(), Dimensions::default()).expect("app");
    assert_frames_rectangular(&mut app);

    search(&mut app, "workers");
    assert_eq!(app.selected().map(|i| i.id.as_str()), Some("i-02"));
    assert!(frame(&app)
        .last()
        .is_some_and(|l| l.contains("[Enter:connect] [Esc:quit]")));
}
