//! Entry logic, separated from process-level argument and exit handling

use std::io::Write;

use pngtrim_core::trim_tree;

use crate::cli::{Cli, USAGE};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Run a trim pass for already parsed arguments.
///
/// Processed paths go to `out`. Returns the process exit status.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> u8 {
    let Some(folder) = cli.folder.as_ref() else {
        // Nothing useful left to report if stdout is gone
        let _ = writeln!(out, "{}", USAGE);
        return EXIT_FAILURE;
    };

    let options = cli.options();
    log::debug!("Trimming {} with {:?}", folder.display(), options);

    match trim_tree(folder, &options, out) {
        Ok(report) if report.is_success() => EXIT_SUCCESS,
        Ok(report) => {
            eprintln!("Error: {} file(s) could not be trimmed", report.failures.len());
            EXIT_FAILURE
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            EXIT_FAILURE
        }
    }
}
