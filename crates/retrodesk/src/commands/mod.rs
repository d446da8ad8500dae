use clap::ArgMatches;
use tracing::error;

use retrodesk_core::events;

pub mod helpers;

mod completions;
mod list;
mod replay;
mod widgets;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("fibonacci", sub_matches)) => widgets::handle_fibonacci_command(sub_matches),
        Some(("tribonacci", sub_matches)) => widgets::handle_tribonacci_command(sub_matches),
        Some(("collatz", sub_matches)) => widgets::handle_collatz_command(sub_matches),
        Some(("bernoulli", sub_matches)) => widgets::handle_bernoulli_command(sub_matches),
        Some(("pascal", sub_matches)) => widgets::handle_pascal_command(sub_matches),
        Some(("euclidean", sub_matches)) => widgets::handle_euclidean_command(sub_matches),
        Some(("widgets", sub_matches)) => list::handle_widgets_command(sub_matches),
        Some(("replay", sub_matches)) => replay::handle_replay_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
