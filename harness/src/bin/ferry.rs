//! Solve the river-crossing puzzle and print the crossings.
//!
//! Usage: `ferry [PER_CLASS]` (default 3).
//!
//! Prints the rendered solution path, then a `key=value` summary.

use std::process::ExitCode;

use ferry_harness::render::render_path;
use ferry_harness::runner::run;
use ferry_harness::worlds::classic::Classic;
use ferry_harness::worlds::scaled::Scaled;
use ferry_search::policy::SearchPolicy;

/// Exit status for a malformed command line.
const USAGE_ERROR: u8 = 2;

fn parse_per_class(arg: Option<String>) -> Result<Option<u32>, String> {
    match arg {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u32>()
            .map(Some)
            .map_err(|e| format!("invalid PER_CLASS {raw:?}: {e}")),
    }
}

fn main() -> ExitCode {
    let per_class = match parse_per_class(std::env::args().nth(1)) {
        Ok(n) => n,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: ferry [PER_CLASS]");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    let policy = SearchPolicy::default();
    let report = match per_class {
        None | Some(3) => run(&Classic::new(), &policy),
        Some(n) => run(&Scaled::new(n), &policy),
    };
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("ferry: {e}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", render_path(&report.result.root));
    println!();
    println!("world={}", report.world_id);
    println!("solved={}", report.is_solved());
    if let Some(crossings) = report.crossings() {
        println!("crossings={crossings}");
    }
    println!(
        "expansions={}",
        report.result.graph.metadata.total_expansions
    );
    println!("digest={}", report.digest);
    ExitCode::SUCCESS
}
