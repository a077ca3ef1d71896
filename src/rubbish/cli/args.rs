use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Load config from PATH
    #[arg(short = 'f', long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Log debug output to stderr (RUBBISH_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to inventory
    #[command(alias = "a")]
    Add {
        /// Name of the item
        name: Option<String>,

        /// The unique id of the item (derived from the name when omitted)
        #[arg(short, long)]
        id: Option<String>,

        /// The unique id for the container of the item
        #[arg(short, long = "container-id")]
        container_id: Option<String>,

        /// The item description
        #[arg(short, long)]
        description: Option<String>,

        /// Tag the item (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Allow this item to exist without a container
        #[arg(long)]
        allow_no_container: bool,
    },

    /// Search for an item
    #[command(alias = "s")]
    Search {
        /// Text to search for
        terms: Vec<String>,

        /// Search the item description only
        #[arg(short, long)]
        description: bool,

        /// Only match items with this tag (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_repeated_tags() {
        let cli = Cli::try_parse_from([
            "rubbish", "add", "drill", "-c", "garage_1", "-t", "tools", "--tag", "power",
        ])
        .unwrap();
        match cli.command {
            Commands::Add {
                name,
                container_id,
                tags,
                allow_no_container,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("drill"));
                assert_eq!(container_id.as_deref(), Some("garage_1"));
                assert_eq!(tags, vec!["tools", "power"]);
                assert!(!allow_no_container);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn search_alias_and_global_config_flag() {
        let cli = Cli::try_parse_from(["rubbish", "s", "red", "box", "-d", "-f", "/tmp/r.toml"])
            .unwrap();
        assert_eq!(cli.config.as_deref(), Some("/tmp/r.toml"));
        match cli.command {
            Commands::Search {
                terms, description, ..
            } => {
                assert_eq!(terms, vec!["red", "box"]);
                assert!(description);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
