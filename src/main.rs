use clap::value_parser;
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::{debug, Level};

use mcnp::language::Settings;
use mcnp::parsing;
use mcnp::problem::{concise_loading_error, full_diagnostic};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let defaults = Settings::default();

    let matches = Command::new("mcnp")
        .version(VERSION)
        .propagate_version(true)
        .about("Tools for working with MCNP input decks.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the parser is doing to stderr."),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the given input deck and report any problems found")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the parsed deck, including its diagnostics, as JSON."),
                )
                .arg(
                    Arg::new("tab-stop")
                        .long("tab-stop")
                        .value_parser(value_parser!(usize))
                        .help("Columns between tab stops when expanding tabs [default: 8]."),
                )
                .arg(
                    Arg::new("line-limit")
                        .long("line-limit")
                        .value_parser(value_parser!(usize))
                        .help("Last column MCNP reads on an input line [default: 80]."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the MCNP input deck you want to check."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new);
            let filename = match filename {
                Some(filename) => filename,
                None => {
                    eprintln!("usage: mcnp check <filename>");
                    std::process::exit(2);
                }
            };

            let settings = Settings {
                tab_stop: submatches
                    .get_one::<usize>("tab-stop")
                    .copied()
                    .unwrap_or(defaults.tab_stop),
                line_limit: submatches
                    .get_one::<usize>("line-limit")
                    .copied()
                    .unwrap_or(defaults.line_limit),
            };

            check(filename, &settings, submatches.get_flag("json"));
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: mcnp [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn check(filename: &Path, settings: &Settings, json: bool) {
    debug!(?filename, ?settings);

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            std::process::exit(2);
        }
    };

    let deck = parsing::parse_with_settings(&content, settings);

    if json {
        match serde_json::to_string_pretty(&deck) {
            Ok(text) => println!("{}", text),
            Err(error) => {
                eprintln!("Failed to serialize deck: {}", error);
                std::process::exit(2);
            }
        }
    } else {
        for diagnostic in &deck.diagnostics {
            eprintln!("{}\n", full_diagnostic(diagnostic, filename, &content));
        }
    }

    if deck.has_errors() {
        std::process::exit(1);
    }
}
