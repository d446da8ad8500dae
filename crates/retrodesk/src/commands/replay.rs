use std::path::Path;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use retrodesk_core::events;
use retrodesk_core::window::{Transition, WindowId};
use retrodesk_core::{Command, Desktop, DesktopSnapshot, Event, Store};

use super::helpers::load_config_with_warning;
use crate::table::TableFormatter;

#[derive(Serialize)]
struct ReplayOutput<'a> {
    events: &'a [Event],
    snapshot: &'a DesktopSnapshot,
}

pub(crate) fn handle_replay_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = matches
        .get_one::<String>("script")
        .ok_or("Script argument is required")?;
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.replay_started",
        script = script.as_str(),
        json_output = json_output
    );

    let commands = match read_script(Path::new(script)) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("❌ Failed to read script '{}': {}", script, e);
            error!(event = "cli.replay_failed", script = script.as_str(), error = %e);
            return Err(e);
        }
    };

    let mut desktop = Desktop::new(load_config_with_warning());
    let mut emitted = Vec::new();
    let mut opened: Vec<WindowId> = Vec::new();

    for (step, mut command) in commands.into_iter().enumerate() {
        if let Err(e) = resolve_alias(&mut command, &opened) {
            eprintln!("❌ Step {} failed: {}", step + 1, e);
            error!(
                event = "cli.replay_failed",
                script = script.as_str(),
                step = step + 1,
                error = %e
            );
            return Err(e.into());
        }

        match desktop.dispatch(command) {
            Ok(step_events) => {
                opened.extend(step_events.iter().filter_map(|event| match event {
                    Event::WindowOpened { window, .. } => Some(window.clone()),
                    _ => None,
                }));
                emitted.extend(step_events);
            }
            Err(e) => {
                eprintln!("❌ Step {} failed: {}", step + 1, e);
                error!(
                    event = "cli.replay_failed",
                    script = script.as_str(),
                    step = step + 1,
                    error = %e
                );
                events::log_app_error(&e);
                return Err(e.into());
            }
        }
    }

    let snapshot = desktop.snapshot();

    if json_output {
        let output = ReplayOutput {
            events: &emitted,
            snapshot: &snapshot,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for event in &emitted {
            println!("{}", describe_event(event));
        }
        print_snapshot(&snapshot);
    }

    info!(
        event = "cli.replay_completed",
        script = script.as_str(),
        event_count = emitted.len(),
        window_count = snapshot.windows.len()
    );
    Ok(())
}

fn read_script(path: &Path) -> Result<Vec<Command>, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let commands: Vec<Command> = serde_json::from_str(&contents)?;
    Ok(commands)
}

/// Rewrites `@N` window references to the N-th window opened by the script.
///
/// Window ids carry a generated instance suffix, so scripts cannot name
/// them up front.
fn resolve_alias(command: &mut Command, opened: &[WindowId]) -> Result<(), String> {
    let Some(window) = command.window_mut() else {
        return Ok(());
    };
    let Some(alias) = window.as_str().strip_prefix('@') else {
        return Ok(());
    };

    let resolved = alias
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| opened.get(index))
        .ok_or_else(|| format!("Unknown window alias '@{}'", alias))?;
    *window = resolved.clone();
    Ok(())
}

fn describe_event(event: &Event) -> String {
    match event {
        Event::WindowOpened {
            window,
            widget,
            instance,
        } => format!("opened   {} ({}, instance {})", window, widget, instance),
        Event::WindowClosed { window } => format!("closed   {}", window),
        Event::WindowRaised { window, z_index } => format!("raised   {} to z={}", window, z_index),
        Event::DragStarted { window } => format!("drag     {} started", window),
        Event::WindowMoved {
            window,
            x,
            y,
            snapped,
        } => {
            let suffix = if *snapped { " (snapped)" } else { "" };
            format!("moved    {} to ({}, {}){}", window, x, y, suffix)
        }
        Event::DragEnded { window } => format!("drag     {} ended", window),
        Event::WindowMinimized { window } => format!("minimize {}", window),
        Event::WindowRestored { window } => format!("restore  {}", window),
        Event::MaximizeToggled { window, maximized } => {
            let state = if *maximized { "on" } else { "off" };
            format!("maximize {} {}", window, state)
        }
        Event::TransitionApplied { window, transition } => {
            let change = match transition {
                Transition::HideMinimized => "+",
                Transition::ClearMinimized => "-",
            };
            format!("class    {} {}{}", window, change, transition.class())
        }
        Event::ViewportResized { width, height } => format!("viewport {}x{}", width, height),
        Event::ClockAdvanced { now_ms } => format!("clock    {}ms", now_ms),
        Event::PanelUpdated { window, changed } => {
            let state = if *changed { "updated" } else { "unchanged" };
            format!("panel    {} {}", window, state)
        }
    }
}

fn print_snapshot(snapshot: &DesktopSnapshot) {
    println!();
    if snapshot.windows.is_empty() {
        println!("No open windows.");
    } else {
        let rows: Vec<Vec<String>> = snapshot
            .windows
            .iter()
            .map(|window| {
                vec![
                    window.id.to_string(),
                    window.title.clone(),
                    window.mode.to_string(),
                    window
                        .z_index
                        .map_or_else(|| "-".to_string(), |z| z.to_string()),
                    window.transform.clone(),
                    window.panel.text().replace('\n', " / "),
                ]
            })
            .collect();
        let headers = ["Window", "Title", "Mode", "Z", "Transform", "Panel"];
        TableFormatter::new(&headers, &rows, 40).print_table(&rows);
    }

    if !snapshot.taskbar.is_empty() {
        let labels: Vec<&str> = snapshot
            .taskbar
            .iter()
            .map(|entry| entry.label.as_str())
            .collect();
        println!("Taskbar: {}", labels.join(" | "));
    }
}
