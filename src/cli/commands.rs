use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "loadtrend", version, about = "Aggregate load-test reports into trends across load levels")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file (defaults to ./loadtrend.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Throughput, response-time and bandwidth trends across load levels
    Trends(TrendsArgs),
    /// List the distinct load levels in first-seen order
    Samples(SelectionArgs),
    /// Show every row recorded at one load level
    Show(ShowArgs),
    /// List the report files a selection reads
    Files(SelectionArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone, Debug)]
pub struct SelectionArgs {
    /// Root directory of the report catalog
    #[arg(long)]
    pub root: Option<String>,

    /// Test scenario (defaults to the first configured scenario)
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Test location (defaults to the first configured location)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Use runs recorded with a cleared cache
    #[arg(long)]
    pub cleared: bool,
}

#[derive(Args, Clone, Debug)]
pub struct TrendsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output as JSON
    #[arg(long, conflicts_with = "markdown")]
    pub json: bool,

    /// Output as Markdown
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Args, Clone, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Load level to show (`# Samples` value)
    #[arg(long = "samples", short = 'n')]
    pub samples: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trends_with_selection() {
        let cli = Cli::try_parse_from([
            "loadtrend", "trends", "--scenario", "Roster", "--location", "VM", "--cleared", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Trends(args) => {
                assert_eq!(args.selection.scenario.as_deref(), Some("Roster"));
                assert_eq!(args.selection.location.as_deref(), Some("VM"));
                assert!(args.selection.cleared);
                assert!(args.json);
            }
            _ => panic!("expected trends"),
        }
    }

    #[test]
    fn test_json_conflicts_with_markdown() {
        assert!(Cli::try_parse_from(["loadtrend", "trends", "--json", "--markdown"]).is_err());
    }

    #[test]
    fn test_show_requires_samples() {
        assert!(Cli::try_parse_from(["loadtrend", "show"]).is_err());
        let cli = Cli::try_parse_from(["loadtrend", "show", "-n", "100"]).unwrap();
        assert!(matches!(cli.command, Commands::Show(ShowArgs { samples: 100, .. })));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["loadtrend", "samples", "-vv", "--config", "x.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("x.yaml"));
    }
}
