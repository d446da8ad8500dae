use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use retrodesk_core::WidgetKind;

use crate::table::TableFormatter;

#[derive(Serialize)]
struct WidgetEntry {
    key: &'static str,
    title: &'static str,
    taskbar_label: &'static str,
    can_minimize: bool,
    can_maximize: bool,
}

impl From<WidgetKind> for WidgetEntry {
    fn from(kind: WidgetKind) -> Self {
        let controls = kind.controls();
        Self {
            key: kind.key(),
            title: kind.title(),
            taskbar_label: kind.taskbar_label().unwrap_or(kind.title()),
            can_minimize: controls.minimize,
            can_maximize: controls.maximize,
        }
    }
}

pub(crate) fn handle_widgets_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.widgets_started", json_output = json_output);

    let entries: Vec<WidgetEntry> = WidgetKind::ALL.into_iter().map(WidgetEntry::from).collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| {
                vec![
                    entry.key.to_string(),
                    entry.title.to_string(),
                    entry.taskbar_label.to_string(),
                    controls_label(entry),
                ]
            })
            .collect();
        let headers = ["Key", "Title", "Taskbar", "Controls"];
        TableFormatter::new(&headers, &rows, 40).print_table(&rows);
    }

    info!(event = "cli.widgets_completed", count = entries.len());
    Ok(())
}

fn controls_label(entry: &WidgetEntry) -> String {
    let mut controls = Vec::new();
    if entry.can_minimize {
        controls.push("min");
    }
    if entry.can_maximize {
        controls.push("max");
    }
    controls.push("close");
    controls.join("/")
}
