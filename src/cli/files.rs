use crate::cli::commands::SelectionArgs;
use crate::cli::CliContext;
use crate::errors::LoadTrendError;
use crate::loader::ReportLoader;

pub fn handle_files(args: SelectionArgs, ctx: &CliContext) -> Result<(), LoadTrendError> {
    let selection = ctx.selection(&args)?;
    let catalog = ctx.catalog(&args);
    let loader = ReportLoader::new(&catalog, ctx.config.catalog.convention());

    let files = loader.select(&selection.variant, selection.cache_state)?;
    if files.is_empty() && !ctx.quiet {
        eprintln!("No {} report files for {}", selection.cache_state, selection.variant);
    }
    for file in files {
        println!("{}", file);
    }
    Ok(())
}
