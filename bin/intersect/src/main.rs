use std::process::ExitCode;

use automata_product::prelude::*;
use owo_colors::OwoColorize;

use tracing::{debug, error, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgAction, ArgMatches, Command};

/// Words that are checked when none are given on the command line.
const BATTERY: [&str; 11] = [
    "", "0", "011", "0110", "10110", "110", "1010110", "010", "00110", "0111", "1011",
];

fn cli() -> clap::Command {
    Command::new("intersect")
    .about("Decides whether binary words contain 011 and end in 0 by simulating the product of two DFAs")
    .arg(
        Arg::new("verbosity")
        .short('v')
        .long("verbosity")
        .num_args(0..=1)
        .require_equals(true)
        .value_parser(["info", "debug", "trace"])
        .default_missing_value("info")
    )
    .arg(
        Arg::new("combine")
        .short('c')
        .long("combine")
        .value_parser(|s: &str| s.parse::<Combinator>())
        .default_value("and")
        .help("how the verdicts of the two components are combined")
    )
    .arg(
        Arg::new("table")
        .short('t')
        .long("table")
        .action(ArgAction::SetTrue)
        .help("print the transition table of the product before checking words")
    )
    .arg(
        Arg::new("words")
        .num_args(0..)
        .help("words to check, a fixed battery is used if none are given")
    )
}

fn level_filter(verbosity: &str) -> filter::LevelFilter {
    match verbosity {
        "trace" => filter::LevelFilter::TRACE,
        "debug" => filter::LevelFilter::DEBUG,
        _ => filter::LevelFilter::INFO,
    }
}

fn setup_logging(matches: &ArgMatches) {
    let Ok(Some(verbosity)) = matches.try_get_one::<String>("verbosity") else {
        return;
    };

    let level = level_filter(verbosity);

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn build(combinator: Combinator) -> Result<machines::Contains011AndEven, AutomatonError> {
    Product::build(machines::contains_011()?, machines::ends_in_zero()?, combinator)
}

pub fn main() -> ExitCode {
    let matches = cli().get_matches();

    setup_logging(&matches);

    let combinator = matches
        .get_one::<Combinator>("combine")
        .copied()
        .unwrap_or_default();
    debug!("combining component verdicts with {combinator:?}");

    let dfa = match build(combinator) {
        Ok(dfa) => dfa,
        Err(e) => {
            error!("could not build automaton: {e}");
            return ExitCode::FAILURE;
        }
    };

    if matches.get_flag("table") {
        println!("{}", TransitionTable::new(&dfa).colored(true));
    }

    let words: Vec<String> = match matches.get_many::<String>("words") {
        Some(words) => words.cloned().collect(),
        None => BATTERY.iter().map(|w| w.to_string()).collect(),
    };

    let mut failed = false;
    for word in &words {
        let quoted = format!("{word:?}");
        match dfa.run(word.chars()) {
            Ok(result) => {
                let verdict = match result.accepted() {
                    true => "accepted".green().to_string(),
                    false => "rejected".red().to_string(),
                };
                println!("{quoted:10} -> {verdict} in {}", result.state().show());
            }
            Err(e) => {
                failed = true;
                println!("{quoted:10} -> {}", e.to_string().yellow());
            }
        }
    }

    match failed {
        true => ExitCode::FAILURE,
        false => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinator_is_parsed_by_clap() {
        let matches = cli()
            .try_get_matches_from(["intersect", "--combine", "xor", "0110"])
            .unwrap();
        assert_eq!(matches.get_one::<Combinator>("combine"), Some(&Combinator::Xor));

        let matches = cli().try_get_matches_from(["intersect"]).unwrap();
        assert_eq!(matches.get_one::<Combinator>("combine"), Some(&Combinator::And));
    }

    #[test]
    fn unknown_combinator_is_an_error() {
        let err = cli()
            .try_get_matches_from(["intersect", "--combine", "nand"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_filter("trace"), filter::LevelFilter::TRACE);
        assert_eq!(level_filter("debug"), filter::LevelFilter::DEBUG);
        assert_eq!(level_filter("info"), filter::LevelFilter::INFO);
        assert_eq!(level_filter("loud"), filter::LevelFilter::INFO);

        let matches = cli().try_get_matches_from(["intersect", "-v"]).unwrap();
        assert_eq!(
            matches.get_one::<String>("verbosity").map(String::as_str),
            Some("info")
        );
    }
}
