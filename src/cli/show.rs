use crate::cli::commands::ShowArgs;
use crate::cli::{empty_status, print_empty, print_failures, CliContext};
use crate::errors::LoadTrendError;
use crate::pipeline::Analysis;
use crate::reporting::format_rows_detail;

pub fn handle_show(args: ShowArgs, ctx: &CliContext) -> Result<(), LoadTrendError> {
    match ctx.analyze(&args.selection)? {
        Analysis::Empty { selection, files, failures } => {
            if args.json {
                let body = empty_status(&selection, &files, &failures);
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print_empty(&selection, &files, &failures);
            }
        }
        Analysis::Ready(report) => {
            let rows = report.rows_for_sample(args.samples);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", format_rows_detail(args.samples, &rows));
            }
            print_failures(&report.failures);
        }
    }
    Ok(())
}
