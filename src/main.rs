// Day View Packer
// Command-line entry point: lays out a JSON list of events for one day

use anyhow::{bail, Context, Result};
use dayview_packer::models::event::Event;
use dayview_packer::models::packed_event::PackedEvent;
use dayview_packer::services::settings::SettingsService;
use dayview_packer::views::{DayViewLayout, HourLine};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// 300px of event area with the default margins.
const DEFAULT_VIEW_WIDTH: f32 = 369.0;

const USAGE: &str =
    "Usage: dayview-packer <events.json> [--config <settings.toml>] [--width <px>] [--grid]";

#[derive(Debug, PartialEq)]
struct CliArgs {
    events_path: PathBuf,
    config_path: Option<PathBuf>,
    view_width: f32,
    grid: bool,
}

#[derive(Serialize)]
struct LayoutOutput {
    calendar_height: f32,
    initial_scroll: Option<f32>,
    events: Vec<PackedEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hour_lines: Option<Vec<HourLine>>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut events_path = None;
    let mut config_path = None;
    let mut view_width = DEFAULT_VIEW_WIDTH;
    let mut grid = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--width" => {
                let value = args.next().context("--width needs a value")?;
                view_width = value
                    .parse()
                    .with_context(|| format!("Invalid width '{}'", value))?;
            }
            "--grid" => grid = true,
            flag if flag.starts_with("--") => bail!("Unknown option '{}'\n{}", flag, USAGE),
            _ if events_path.is_none() => events_path = Some(PathBuf::from(&arg)),
            _ => bail!("Unexpected argument '{}'\n{}", arg, USAGE),
        }
    }

    let events_path = events_path.context(USAGE)?;
    Ok(CliArgs {
        events_path,
        config_path,
        view_width,
        grid,
    })
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;

    let settings_path = match args.config_path {
        Some(path) => path,
        None => SettingsService::default_path()?,
    };
    let settings = SettingsService::new(settings_path).get()?;

    let raw = fs::read_to_string(&args.events_path)
        .with_context(|| format!("Failed to read events file {:?}", args.events_path))?;
    let events: Vec<Event> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse events file {:?}", args.events_path))?;
    log::info!("Loaded {} events from {:?}", events.len(), args.events_path);

    let layout = DayViewLayout::new(&settings, args.view_width);
    let packed = layout.pack(&events).context("Failed to lay out events")?;

    let output = LayoutOutput {
        calendar_height: layout.calendar_height(),
        initial_scroll: layout.initial_scroll_offset(&packed),
        events: packed,
        hour_lines: args.grid.then(|| layout.hour_lines()),
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize layout")?
    );
    Ok(())
}
