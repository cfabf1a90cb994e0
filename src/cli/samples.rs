use crate::cli::commands::SelectionArgs;
use crate::cli::{print_empty, print_failures, CliContext};
use crate::errors::LoadTrendError;
use crate::pipeline::Analysis;
use crate::reporting::format_samples_list;

pub fn handle_samples(args: SelectionArgs, ctx: &CliContext) -> Result<(), LoadTrendError> {
    match ctx.analyze(&args)? {
        Analysis::Empty { selection, files, failures } => print_empty(&selection, &files, &failures),
        Analysis::Ready(report) => {
            print!("{}", format_samples_list(&report.distinct_samples));
            print_failures(&report.failures);
        }
    }
    Ok(())
}
