use anyhow::{Context, Result};

use metacorr_cli::analysis::{AnalyzeOptions, analyze_table};
use metacorr_ingest::builtin_csv;

use crate::cli::AnalyzeArgs;
use crate::summary::print_summary;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let options = AnalyzeOptions {
        iterations: args.iterations,
        seed: args.seed,
        skip_bootstrap: args.skip_bootstrap,
    };
    let report = analyze_table(&args.table, &options)?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize analysis")?;
        println!("{json}");
    } else {
        print_summary(&report);
    }
    Ok(())
}

pub fn run_sample() {
    print!("{}", builtin_csv());
}
