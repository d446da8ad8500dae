use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("retrodesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Retro desktop widgets and window-session replay")
        .long_about("retrodesk runs the number-theory widgets of the retro desktop (Fibonacci, Tribonacci, Collatz, Bernoulli, Pascal, Euclidean) from the command line, and replays scripted window sessions through the desktop window manager.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fibonacci")
                .about("Print the first N Fibonacci numbers (1-100)")
                .arg(
                    Arg::new("count")
                        .help("Number of terms")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("tribonacci")
                .about("Print the first N Tribonacci numbers (1-100)")
                .arg(
                    Arg::new("count")
                        .help("Number of terms")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("collatz")
                .about("Print the Collatz sequence of an odd seed (1-1,000,000)")
                .arg(
                    Arg::new("seed")
                        .help("Positive odd starting value")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("bernoulli")
                .about("Print the first N Bernoulli numbers (1-30)")
                .arg(
                    Arg::new("count")
                        .help("Number of values")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("pascal")
                .about("Print Pascal's triangle down to row HEIGHT (0-15)")
                .arg(
                    Arg::new("height")
                        .help("Index of the last row")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1)
                )
                .arg(
                    Arg::new("reveal")
                        .long("reveal")
                        .help("Also print the reveal animation schedule")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("euclidean")
                .about("Compute a GCD step by step (operands 1-1,000,000,000)")
                .arg(
                    Arg::new("a")
                        .help("First operand")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1)
                )
                .arg(
                    Arg::new("b")
                        .help("Second operand")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(2)
                )
        )
        .subcommand(
            Command::new("widgets")
                .about("List the widget keys that can be opened")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("replay")
                .about("Replay a JSON script of desktop commands")
                .arg(
                    Arg::new("script")
                        .help("Path to a JSON array of commands")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print events and the final snapshot as JSON")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                        .index(1)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "retrodesk");
    }

    #[test]
    fn test_cli_fibonacci_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["retrodesk", "fibonacci", "5"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let sub_matches = matches.subcommand_matches("fibonacci").unwrap();
        assert_eq!(sub_matches.get_one::<String>("count").unwrap(), "5");
    }

    #[test]
    fn test_cli_negative_input_reaches_handler() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["retrodesk", "collatz", "-3"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let sub_matches = matches.subcommand_matches("collatz").unwrap();
        assert_eq!(sub_matches.get_one::<String>("seed").unwrap(), "-3");
    }

    #[test]
    fn test_cli_euclidean_requires_two_operands() {
        let app = build_cli();
        assert!(
            app.try_get_matches_from(vec!["retrodesk", "euclidean", "48"])
                .is_err()
        );

        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["retrodesk", "euclidean", "48", "18"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("euclidean").unwrap();
        assert_eq!(sub_matches.get_one::<String>("a").unwrap(), "48");
        assert_eq!(sub_matches.get_one::<String>("b").unwrap(), "18");
    }

    #[test]
    fn test_cli_pascal_reveal_flag() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["retrodesk", "pascal", "3", "--reveal"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("pascal").unwrap();
        assert!(sub_matches.get_flag("reveal"));
    }

    #[test]
    fn test_cli_replay_json_flag() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["retrodesk", "replay", "session.json", "--json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("replay").unwrap();
        assert_eq!(
            sub_matches.get_one::<String>("script").unwrap(),
            "session.json"
        );
        assert!(sub_matches.get_flag("json"));
    }

    #[test]
    fn test_cli_completions_invalid_shell() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["retrodesk", "completions", "tcsh"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_verbose_flag_short() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["retrodesk", "-v", "widgets"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag_after_subcommand() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["retrodesk", "widgets", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag_default_false() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["retrodesk", "widgets"])
            .unwrap();
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let app = build_cli();
        assert!(app.try_get_matches_from(vec!["retrodesk"]).is_err());
    }
}
