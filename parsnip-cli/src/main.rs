//! Command-line interface for parsnip
//! This binary runs one of the built-in grammars over some input and reports the parse result.
//!
//! Usage:
//!   parsnip parse [`<path>`] [--text `<text>`] [--grammar `<grammar>`] [--format `<format>`]
//!                                                    - Parse a file, a literal or stdin
//!   parsnip grammars                                 - List the built-in grammars
//!
//! Configuration is read from the embedded defaults, then `./parsnip.toml` if present, then
//! `--config <file>`; command-line flags override all of them.
//!
//! Exit status: 0 when the input parses, 1 when it is rejected, 2 on any other error.
//! JSON nested deeper than `parsnip::grammars::json::MAX_DEPTH` is rejected (status 1).

mod output;

use clap::{Arg, ArgAction, ArgMatches, Command};
use parsnip::grammars::BuiltinGrammar;
use parsnip_config::{Loader, ParsnipConfig};
use std::io::Read;
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "parsnip.toml";

fn main() {
    let matches = Command::new("parsnip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run parsnip's built-in grammars over text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse input with a built-in grammar")
                .arg(
                    Arg::new("path")
                        .help("File to parse; `-` or nothing reads stdin")
                        .conflicts_with("text")
                        .index(1),
                )
                .arg(
                    Arg::new("text")
                        .long("text")
                        .short('t')
                        .help("Parse this text instead of a file"),
                )
                .arg(
                    Arg::new("grammar")
                        .long("grammar")
                        .short('g')
                        .help("Grammar to run (json, assignment)")
                        .value_parser(|name: &str| name.parse::<BuiltinGrammar>()),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (text, json, yaml)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("Trace every rule the grammar enters")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("grammars").about("List the built-in grammars"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("grammars", _)) => handle_grammars_command(),
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let config = load_config(matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(2);
    });
    init_logging(matches.get_flag("verbose"), &config.logging.level);

    let input = read_input(matches, config.parse.trim_trailing_newline).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(2);
    });

    let parser = config.parse.grammar.build().unwrap_or_else(|e| {
        eprintln!("Grammar error: {}", e);
        std::process::exit(2);
    });
    tracing::debug!(grammar = %config.parse.grammar, bytes = input.len(), "parsing");

    let result = parser.run(&input);
    let rendered = output::render(&result, config.parse.format).unwrap_or_else(|e| {
        eprintln!("Error formatting result: {}", e);
        std::process::exit(2);
    });
    print!("{}", rendered);

    if result.is_failure() {
        std::process::exit(1);
    }
}

/// Handle the grammars command
fn handle_grammars_command() {
    println!("Available grammars:\n");
    for grammar in BuiltinGrammar::ALL {
        println!("  {}", grammar);
        println!("    {}", grammar.description());
        println!();
    }
}

/// Layer defaults, the local config file, `--config` and flag overrides.
fn load_config(matches: &ArgMatches) -> Result<ParsnipConfig, parsnip_config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(grammar) = matches.get_one::<BuiltinGrammar>("grammar") {
        loader = loader.set_override("parse.grammar", grammar.name())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("parse.format", format.as_str())?;
    }
    loader.build()
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level.
fn init_logging(verbose: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("parsnip=trace")
        } else {
            EnvFilter::new(level)
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(matches: &ArgMatches, trim_trailing_newline: bool) -> std::io::Result<String> {
    if let Some(text) = matches.get_one::<String>("text") {
        return Ok(text.clone());
    }

    let mut input = match matches.get_one::<String>("path").map(String::as_str) {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path)?,
    };

    if trim_trailing_newline {
        if input.ends_with("\r\n") {
            input.truncate(input.len() - 2);
        } else if input.ends_with('\n') {
            input.truncate(input.len() - 1);
        }
    }
    Ok(input)
}
