//! # cml-pick Entry Point
//!
//! Command-line front end for the cumulus selector.
//!
//! ## Overview
//!
//! `cml-pick` reads a JSON array of resource records, lets the operator pick
//! one interactively, and prints the choice as JSON on stdout. The selector
//! draws on stderr, so the command composes with pipes and `$(...)`:
//!
//! ```bash
//! # Pick a VM from a listing and connect to it
//! cml-pick vm --input vms.json
//!
//! # Read records from stdin, with a different theme
//! aws-list-vpcs | cml-pick vpc --theme Nord
//!
//! # Show the built-in themes
//! cml-pick --list-themes
//! ```
//!
//! ## Output
//!
//! On commit, one line: `{"action": "default", "item": {...}}`. The action is
//! `default` for Enter, or the tag of a secondary binding (`start`/`stop` for
//! VMs). Cancelling prints nothing and exits 0. An empty input list prints a
//! message on stderr and exits 1.
//!
//! ## Logging
//!
//! Log events go to `--log-file` when given and are discarded otherwise,
//! since stderr belongs to the selector. The level is read from `CUMULUS_LOG`
//! (`tracing_subscriber::EnvFilter` syntax, default `info`).

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use cumulus::resource::{
    ContextEntry, ContextSchema, Instance, InstanceSchema, LoadBalancer, LoadBalancerSchema,
    Network, NetworkSchema, Profile, ProfileSchema, ScalingGroup, ScalingGroupSchema, Vm,
    VmSchema,
};
use cumulus::ui::config::Config;
use cumulus::ui::schema::Schema;
use cumulus::ui::theme::Theme;
use cumulus::ui::{select, Action, Outcome, SelectError, SelectOptions};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CUMULUS_LOG";

/// Resource type of the input records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Vm,
    Asg,
    Vpc,
    Lb,
    Context,
    Profile,
    Instance,
}

#[derive(Parser, Debug)]
#[command(name = "cml-pick")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactively pick a cloud resource from a JSON listing", long_about = None)]
struct Args {
    /// Resource type of the input records
    #[arg(value_enum, required_unless_present = "list_themes")]
    kind: Option<Kind>,

    /// Read records from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Color theme (overrides the config file)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Number of visible list rows (overrides the config file)
    #[arg(long, value_name = "N")]
    list_height: Option<usize>,

    /// Append log output to PATH
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the built-in theme names and exit
    #[arg(long)]
    list_themes: bool,
}

/// What gets printed on commit.
#[derive(Debug, Serialize)]
struct Selection<'a, T> {
    action: &'static str,
    item: &'a T,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run(&args);

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match log_file {
        Some(path) => {
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(io::sink).try_init();
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<ExitCode> {
    if args.list_themes {
        print_themes(&mut io::stdout().lock())?;
        return Ok(ExitCode::SUCCESS);
    }
    let Some(kind) = args.kind else {
        bail!("a resource kind is required");
    };

    let options = select_options(Config::load(), args)?;
    let input = read_input(args.input.as_deref())?;
    tracing::debug!(?kind, bytes = input.len(), "read input");

    match kind {
        Kind::Vm => pick(parse_items::<Vm>(&input)?, VmSchema::new(), &options),
        Kind::Asg => {
            let items: Vec<ScalingGroup> = parse_items(&input)?;
            let schema = ScalingGroupSchema::for_items(&items);
            pick(items, schema, &options)
        }
        Kind::Vpc => pick(parse_items::<Network>(&input)?, NetworkSchema::new(), &options),
        Kind::Lb => pick(
            parse_items::<LoadBalancer>(&input)?,
            LoadBalancerSchema::new(),
            &options,
        ),
        Kind::Context => {
            let items: Vec<ContextEntry> = parse_items(&input)?;
            let schema = ContextSchema::for_items(&items);
            pick(items, schema, &options)
        }
        Kind::Profile => pick(parse_items::<Profile>(&input)?, ProfileSchema::new(), &options),
        Kind::Instance => pick(
            parse_items::<Instance>(&input)?,
            InstanceSchema::new(),
            &options,
        ),
    }
}

/// Config file values with command-line overrides applied.
fn select_options(mut config: Config, args: &Args) -> Result<SelectOptions> {
    if let Some(name) = &args.theme {
        if Theme::by_name(name).is_none() {
            bail!("Unknown theme '{name}' (see --list-themes)");
        }
        config.theme = name.clone();
    }
    if let Some(height) = args.list_height {
        config.list_height = height;
    }

    Ok(SelectOptions {
        dims: config.dimensions(),
        theme: config.theme().clone(),
    })
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read records from stdin")?;
            Ok(input)
        }
    }
}

fn parse_items<T: DeserializeOwned>(input: &str) -> Result<Vec<T>> {
    serde_json::from_str(input).context("Failed to parse input records")
}

fn pick<S>(items: Vec<S::Item>, schema: S, options: &SelectOptions) -> Result<ExitCode>
where
    S: Schema,
    S::Item: Serialize,
{
    match select(items, schema, options) {
        Ok(Outcome::Committed { item, action }) => {
            print_selection(&mut io::stdout().lock(), action, &item)?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::Cancelled) => Ok(ExitCode::SUCCESS),
        Err(err @ SelectError::Empty { .. }) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("Selector failed"),
    }
}

fn print_selection<W: Write, T: Serialize>(out: &mut W, action: Action, item: &T) -> Result<()> {
    let selection = Selection {
        action: action.tag(),
        item,
    };
    serde_json::to_writer(&mut *out, &selection).context("Failed to serialize selection")?;
    writeln!(out).context("Failed to write selection")?;
    Ok(())
}

fn print_themes<W: Write>(out: &mut W) -> Result<()> {
    let default = Theme::default_theme().name;
    for theme in Theme::all() {
        if theme.name == default {
            writeln!(out, "{} (default)", theme.name)?;
        } else {
            writeln!(out, "{}", theme.name)?;
        }
    }
    Ok(())
}
