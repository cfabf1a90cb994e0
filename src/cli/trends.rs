use crate::cli::commands::TrendsArgs;
use crate::cli::{empty_status, heading, print_empty, print_failures, CliContext};
use crate::errors::LoadTrendError;
use crate::pipeline::Analysis;
use crate::reporting::{format_bandwidth_table, format_explanations, format_markdown, format_trend_table};

pub fn handle_trends(args: TrendsArgs, ctx: &CliContext) -> Result<(), LoadTrendError> {
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
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            if args.markdown {
                print!("{}", format_markdown(&report));
                return Ok(());
            }

            if !ctx.quiet {
                println!("{}\n", heading("Test Results Trends over different # Samples"));
            }
            print!("{}", format_trend_table(&report));

            if !ctx.quiet {
                println!("\n{}\n", heading("Received KB/sec and Sent KB/sec vs # Samples"));
            } else {
                println!();
            }
            print!("{}", format_bandwidth_table(&report));

            if !ctx.quiet {
                println!();
                print!("{}", format_explanations());
            }
            print_failures(&report.failures);
        }
    }
    Ok(())
}
