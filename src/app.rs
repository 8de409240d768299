//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the report pipeline (ingest -> buffers -> signals)
//! - prints the summary/table
//! - writes optional exports
//! - generates synthetic samples

use chrono::Local;
use clap::Parser;

use crate::cli::{Command, ReportArgs, SampleArgs};
use crate::data::{SampleConfig, generate_sample};
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `sku` binary.
pub fn run() -> Result<(), AppError> {
    // We want `sku -d demand.csv -i stock.csv` to behave like
    // `sku report -d demand.csv -i stock.csv`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // keeping the common invocation short.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args, OutputMode::Full),
        Command::Signals(args) => handle_report(args, OutputMode::TableOnly),
        Command::Sample(args) => handle_sample(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    TableOnly,
}

fn handle_report(args: ReportArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = report_config_from_args(&args);
    let run = pipeline::run_report(&config)?;
    let asof_date = Local::now().date_naive();

    if mode == OutputMode::Full {
        print!(
            "{}",
            crate::report::format::format_run_summary(
                &run.demand,
                &run.inventory,
                &run.buffers,
                &config,
                asof_date,
            )
        );
    }

    println!("{}", crate::report::format::format_signal_table(&run.rows));

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_report_csv(path, &run.rows)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::export::write_report_json(path, asof_date, &config, &run.buffers, &run.rows)?;
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let sample = generate_sample(&SampleConfig {
        skus: args.skus,
        days: args.days,
        seed: args.seed,
        missing_prob: args.missing_prob,
    })?;

    std::fs::write(&args.demand_out, sample.demand_csv()).map_err(|e| {
        AppError::usage(format!(
            "Failed to write demand CSV '{}': {e}",
            args.demand_out.display()
        ))
    })?;
    std::fs::write(&args.inventory_out, sample.inventory_csv()).map_err(|e| {
        AppError::usage(format!(
            "Failed to write inventory CSV '{}': {e}",
            args.inventory_out.display()
        ))
    })?;

    println!(
        "Wrote {} SKUs x {} days of demand to '{}' and an inventory snapshot to '{}'.",
        args.skus,
        args.days,
        args.demand_out.display(),
        args.inventory_out.display()
    );

    Ok(())
}

pub fn report_config_from_args(args: &ReportArgs) -> RunConfig {
    RunConfig {
        demand_path: args.demand.clone(),
        inventory_path: args.inventory.clone(),
        lead_time: args.lead_time,
        fallback: args.fallback,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
    }
}

/// Rewrite argv so `sku <flags>` defaults to `sku report <flags>`.
///
/// Rules:
/// - `sku`                     -> unchanged (clap reports the missing subcommand)
/// - `sku -d demand.csv ...`   -> `sku report -d demand.csv ...`
/// - `sku --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "signals" | "sample");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(args: &[&str]) -> Vec<String> {
        let mut argv = vec!["sku".to_string()];
        argv.extend(args.iter().map(|s| s.to_string()));
        rewrite_args(argv)
    }

    #[test]
    fn flags_first_invocation_defaults_to_report() {
        assert_eq!(
            rewrite(&["-d", "demand.csv", "-i", "stock.csv"]),
            ["sku", "report", "-d", "demand.csv", "-i", "stock.csv"]
        );
    }

    #[test]
    fn explicit_subcommands_pass_through() {
        assert_eq!(rewrite(&["sample", "--seed", "7"]), ["sku", "sample", "--seed", "7"]);
        assert_eq!(rewrite(&["signals", "-d", "x"]), ["sku", "signals", "-d", "x"]);
    }

    #[test]
    fn help_and_version_pass_through() {
        assert_eq!(rewrite(&["--help"]), ["sku", "--help"]);
        assert_eq!(rewrite(&["-V"]), ["sku", "-V"]);
        assert_eq!(rewrite(&[]), ["sku"]);
    }
}
