use std::path::PathBuf;
use clap::Parser;
use loadtrend::cli::{self, CliContext, Commands};
use loadtrend::config;
use loadtrend::errors::LoadTrendError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    console::set_colors_enabled(!cli.no_color);
    console::set_colors_enabled_stderr(!cli.no_color);

    debug!(
        git_hash = option_env!("GIT_HASH").unwrap_or("dev"),
        built = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
        "loadtrend starting"
    );

    let result = run(cli);

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(cli::exit_code(&e));
        }
    }
}

fn run(cli: cli::Cli) -> Result<(), LoadTrendError> {
    if let Commands::Validate(args) = &cli.command {
        return handle_validate(args);
    }

    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = config::load_or_default(config_path.as_deref())?;
    let ctx = CliContext::new(config, cli.quiet);

    match cli.command {
        Commands::Trends(args) => cli::trends::handle_trends(args, &ctx),
        Commands::Samples(args) => cli::samples::handle_samples(args, &ctx),
        Commands::Show(args) => cli::show::handle_show(args, &ctx),
        Commands::Files(args) => cli::files::handle_files(args, &ctx),
        Commands::Validate(_) => Ok(()),
    }
}

fn handle_validate(args: &cli::commands::ValidateArgs) -> Result<(), LoadTrendError> {
    let path = PathBuf::from(&args.config);
    let _config = config::parse_config(&path)?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
