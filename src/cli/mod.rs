pub mod commands;
pub mod trends;
pub mod samples;
pub mod show;
pub mod files;

pub use commands::{Cli, Commands};

use std::path::PathBuf;
use console::style;
use crate::config::LoadTrendConfig;
use crate::errors::LoadTrendError;
use crate::loader::{DirectoryCatalog, FileFailure};
use crate::models::{CacheState, Selection, Variant};
use crate::pipeline::{analyze, Analysis, AnalysisOptions};
use crate::reporting::format_failures;
use commands::SelectionArgs;
use tracing::info;

/// Settings shared by every subcommand.
pub struct CliContext {
    pub config: LoadTrendConfig,
    pub quiet: bool,
}

impl CliContext {
    pub fn new(config: LoadTrendConfig, quiet: bool) -> Self {
        Self { config, quiet }
    }

    /// Resolve command-line choices against configured defaults.
    pub fn selection(&self, args: &SelectionArgs) -> Result<Selection, LoadTrendError> {
        let choices = &self.config.selection;
        let scenario = args
            .scenario
            .as_deref()
            .or_else(|| choices.default_scenario())
            .ok_or_else(|| LoadTrendError::Config("no scenario configured".into()))?;
        let location = args
            .location
            .as_deref()
            .or_else(|| choices.default_location())
            .ok_or_else(|| LoadTrendError::Config("no location configured".into()))?;

        Ok(Selection::new(
            Variant::new(scenario, location),
            CacheState::from_flag(args.cleared),
        ))
    }

    pub fn catalog(&self, args: &SelectionArgs) -> DirectoryCatalog {
        let root = args.root.as_deref().unwrap_or(&self.config.catalog.root);
        DirectoryCatalog::new(PathBuf::from(root))
    }

    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions::from(&self.config.catalog)
    }

    /// One full analysis pass for the selection named on the command line.
    pub fn analyze(&self, args: &SelectionArgs) -> Result<Analysis, LoadTrendError> {
        let selection = self.selection(args)?;
        let catalog = self.catalog(args);
        let dir = catalog.variant_dir(&selection.variant)?;
        info!(
            path = %dir.display(),
            cache_state = %selection.cache_state,
            "Selected report path"
        );
        analyze(&catalog, &selection, &self.options())
    }
}

/// Process exit status for an error that ends a command. `EmptyResult` is not
/// an error and exits 0.
pub fn exit_code(error: &LoadTrendError) -> i32 {
    match error {
        LoadTrendError::Config(_) | LoadTrendError::Yaml(_) => 2,
        LoadTrendError::InvalidSelection(_) => 3,
        _ => 1,
    }
}

pub(crate) fn empty_message(selection: &Selection, files: &[String]) -> String {
    format!(
        "No reports found for {} ({} cache, {} candidate file(s))",
        selection.variant,
        selection.cache_state,
        files.len()
    )
}

/// JSON body printed by `--json` commands when nothing could be loaded.
pub(crate) fn empty_status(
    selection: &Selection,
    files: &[String],
    failures: &[FileFailure],
) -> serde_json::Value {
    serde_json::json!({
        "status": "empty",
        "selection": selection,
        "files": files,
        "failures": failures,
    })
}

/// Tell the user nothing could be loaded, listing skipped files.
pub(crate) fn print_empty(selection: &Selection, files: &[String], failures: &[FileFailure]) {
    eprintln!("{} {}", style("⚠").yellow(), empty_message(selection, files));
    print_failures(failures);
}

pub(crate) fn print_failures(failures: &[FileFailure]) {
    if failures.is_empty() {
        return;
    }
    eprintln!("{} Skipped {} file(s):", style("⚠").yellow(), failures.len());
    eprint!("{}", format_failures(failures));
}

pub(crate) fn heading(text: &str) -> String {
    style(text).bold().to_string()
}
