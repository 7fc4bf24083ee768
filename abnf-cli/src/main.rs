//! Command-line interface for abnf2peg
//!
//! Compiles an ABNF grammar into PEGTL rule definitions, printed one per line.
//!
//! Usage:
//!   abnf2peg `<source>` [--config `<file>`]
//!
//! Errors are printed as `<source>:<line>:<column>: <message>` and make the
//! tool exit with status 1. Set `RUST_LOG` (e.g. `RUST_LOG=debug`) to trace
//! the compilation stages on stderr.

use abnf_config::{AbnfConfig, Loader};
use abnf_parser::abnf::parsing::analysis;
use abnf_parser::abnf::transforms::TransformError;
use abnf_parser::abnf::GrammarLoader;
use clap::{Arg, ArgAction, Command};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("abnf2peg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile ABNF grammars into PEGTL rules")
        .arg(
            Arg::new("source")
                .help("Path to the ABNF grammar")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML file layered over the default configuration"),
        )
        .get_matches();

    let sources: Vec<&String> = matches
        .get_many::<String>("source")
        .map(|values| values.collect())
        .unwrap_or_default();

    let [source] = sources.as_slice() else {
        check_grammar();
        eprintln!("Usage: abnf2peg SOURCE");
        process::exit(1);
    };

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|message| {
        eprintln!("{}", message);
        process::exit(1);
    });

    handle_compile_command(source, &config);
}

/// Log to stderr so stdout only carries generated code.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the grammar self-check, reporting problems only.
fn check_grammar() {
    let issues = analysis::analyze();
    for issue in &issues {
        eprintln!("grammar self-check: {}", issue);
    }
    debug!(issues = issues.len(), "grammar self-check finished");
}

fn load_config(path: Option<&String>) -> Result<AbnfConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build().map_err(|err| match path {
        Some(path) => format!("{}: {}", path, err),
        None => err.to_string(),
    })
}

/// Compile `source` and print the generated lines.
fn handle_compile_command(source: &str, config: &AbnfConfig) {
    let loader = GrammarLoader::from_path(source).unwrap_or_else(|err| {
        eprintln!("{}: {}", source, err);
        process::exit(1);
    });

    match loader.compile(&config.generator_options()) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(TransformError::Compile(err)) => {
            eprintln!("{}:{}", source, err);
            process::exit(1);
        }
    }
}
