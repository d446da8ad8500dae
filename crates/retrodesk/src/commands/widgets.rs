use clap::ArgMatches;
use tracing::{error, info};

use retrodesk_core::events;
use retrodesk_core::widgets::{
    WidgetError, WidgetKind, bernoulli, collatz, euclidean, input, pascal, sequences,
};

use crate::table::TableFormatter;

/// Print a rejected input the same way the widget panel would show it.
fn reject(kind: WidgetKind, e: WidgetError) -> Box<dyn std::error::Error> {
    eprintln!("❌ {}: {}", kind.title(), e);
    error!(
        event = "cli.widget_input_rejected",
        widget = kind.key(),
        error = %e
    );
    events::log_app_error(&e);
    e.into()
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Box<dyn std::error::Error>> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| format!("{} argument is required", name).into())
}

pub(crate) fn handle_fibonacci_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = required(matches, "count")?;
    info!(event = "cli.fibonacci_started", input = raw);

    let count =
        sequences::parse_term_count(raw).map_err(|e| reject(WidgetKind::Fibonacci, e))?;
    println!("{}", sequences::join_terms(&sequences::fibonacci(count)));

    info!(event = "cli.fibonacci_completed", count = count);
    Ok(())
}

pub(crate) fn handle_tribonacci_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = required(matches, "count")?;
    info!(event = "cli.tribonacci_started", input = raw);

    let count =
        sequences::parse_term_count(raw).map_err(|e| reject(WidgetKind::Tribonacci, e))?;
    println!("{}", sequences::join_terms(&sequences::tribonacci(count)));

    info!(event = "cli.tribonacci_completed", count = count);
    Ok(())
}

pub(crate) fn handle_collatz_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = required(matches, "seed")?;
    info!(event = "cli.collatz_started", input = raw);

    let seed = collatz::parse_seed(raw).map_err(|e| reject(WidgetKind::Collatz, e))?;
    let sequence = collatz::collatz(seed);
    println!("{}", sequences::join_terms(&sequence));
    println!("Length: {}", sequence.len());

    info!(
        event = "cli.collatz_completed",
        seed = seed,
        length = sequence.len()
    );
    Ok(())
}

pub(crate) fn handle_bernoulli_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = required(matches, "count")?;
    info!(event = "cli.bernoulli_started", input = raw);

    let count = bernoulli::parse_count(raw).map_err(|e| reject(WidgetKind::Bernoulli, e))?;
    println!("{}", bernoulli::display(&bernoulli::bernoulli(count)));

    info!(event = "cli.bernoulli_completed", count = count);
    Ok(())
}

pub(crate) fn handle_pascal_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = required(matches, "height")?;
    let show_reveal = matches.get_flag("reveal");
    info!(
        event = "cli.pascal_started",
        input = raw,
        reveal = show_reveal
    );

    let height = input::parse_in_range(raw, 0, i64::from(pascal::MAX_HEIGHT))
        .map_err(|e| reject(WidgetKind::Pascal, e))? as usize;
    let rows = pascal::pascal(height);

    for row in &rows {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{}", cells.join(" "));
    }

    if show_reveal {
        let schedule: Vec<Vec<String>> = pascal::reveal_schedule(&rows)
            .into_iter()
            .map(|cell| {
                vec![
                    cell.row.to_string(),
                    cell.col.to_string(),
                    cell.value.to_string(),
                    format!("{}ms", cell.delay_ms),
                    format!("{}ms", cell.duration_ms),
                ]
            })
            .collect();
        println!();
        let headers = ["Row", "Col", "Value", "Delay", "Duration"];
        TableFormatter::new(&headers, &schedule, 12).print_table(&schedule);
    }

    info!(
        event = "cli.pascal_completed",
        height = height,
        rows = rows.len()
    );
    Ok(())
}

pub(crate) fn handle_euclidean_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw_a = required(matches, "a")?;
    let raw_b = required(matches, "b")?;
    info!(event = "cli.euclidean_started", a = raw_a, b = raw_b);

    let (a, b) = euclidean::parse_operands(raw_a, raw_b)
        .map_err(|e| reject(WidgetKind::Euclidean, e))?;
    let trace = euclidean::euclidean(a, b);
    for line in euclidean::display(a, b, &trace) {
        println!("{}", line);
    }

    info!(
        event = "cli.euclidean_completed",
        gcd = trace.gcd,
        steps = trace.steps.len()
    );
    Ok(())
}
