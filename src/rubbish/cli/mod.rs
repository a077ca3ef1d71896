//! Command-line front ends.
//!
//! `rubbish` and `whereis` are the same program with different names,
//! default config paths, and result printing. Each binary's `main` picks a
//! [`Frontend`] and hands it to [`run`]. This is the only module that
//! touches stdout, stderr, or exit codes.

mod args;
mod print;

pub use print::{format_lines, format_table};

use crate::api::{AddRequest, RubbishApi, SearchField};
use crate::config::{expand_home, open_store, RubbishConfig};
use crate::error::Result;
use crate::store::Store;
use args::{Cli, Commands};
use clap::{CommandFactory, FromArgMatches};
use print::{print_lines, print_messages, print_table};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "RUBBISH_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Table,
    Lines,
}

/// What distinguishes one binary from the other.
#[derive(Debug, Clone, Copy)]
pub struct Frontend {
    pub name: &'static str,
    pub about: &'static str,
    pub default_config: &'static str,
    pub output: OutputStyle,
}

pub const RUBBISH: Frontend = Frontend {
    name: "rubbish",
    about: "find your rubbish stuff",
    default_config: "~/.config/rubbish.toml",
    output: OutputStyle::Table,
};

pub const WHEREIS: Frontend = Frontend {
    name: "whereis",
    about: "find your stuff",
    default_config: "~/.config/whereis/whereis.toml",
    output: OutputStyle::Lines,
};

/// Parse arguments, run the command, and exit non-zero on failure.
pub fn main(frontend: Frontend) {
    if let Err(e) = run(frontend) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn run(frontend: Frontend) -> Result<()> {
    let matches = Cli::command()
        .name(frontend.name)
        .bin_name(frontend.name)
        .about(frontend.about)
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.verbose);

    let mut api = RubbishApi::new(store_from_cli(&cli, &frontend)?);

    match cli.command {
        Commands::Add {
            name,
            id,
            container_id,
            description,
            tags,
            allow_no_container,
        } => {
            let request = AddRequest {
                name: name.unwrap_or_default(),
                id,
                container_id,
                description,
                tags,
                allow_no_container,
            };
            handle_add(&mut api, request)
        }
        Commands::Search {
            terms,
            description,
            tags,
        } => {
            let field = if description {
                SearchField::Description
            } else {
                SearchField::All
            };
            handle_search(&api, &frontend, &terms, &tags, field)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn store_from_cli(cli: &Cli, frontend: &Frontend) -> Result<Box<dyn Store>> {
    let config_path = cli
        .config
        .as_deref()
        .unwrap_or(frontend.default_config);
    let config_path = expand_home(config_path)?;
    let config = RubbishConfig::load(&config_path, frontend.name)?;
    open_store(&config)
}

fn handle_add<S: Store>(api: &mut RubbishApi<S>, request: AddRequest) -> Result<()> {
    let result = api.add_item(request)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search<S: Store>(
    api: &RubbishApi<S>,
    frontend: &Frontend,
    terms: &[String],
    tags: &[String],
    field: SearchField,
) -> Result<()> {
    let result = api.search_items(terms, tags, field)?;
    match frontend.output {
        OutputStyle::Table => print_table(&result.items),
        OutputStyle::Lines => print_lines(&result.items),
    }
    print_messages(&result.messages);
    Ok(())
}
