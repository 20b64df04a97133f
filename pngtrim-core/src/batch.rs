//! Sequential batch processing of a file set

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{ErrorPolicy, TrimOptions};
use crate::discover::find_pngs;
use crate::error::TrimError;
use crate::trim::{trim_file, Outcome};

/// Summary of a finished batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files handled successfully, in processing order.
    pub processed: Vec<(PathBuf, Outcome)>,
    /// Per-file failures. Only populated with [`ErrorPolicy::Continue`].
    pub failures: Vec<TrimError>,
}

impl BatchReport {
    pub fn trimmed(&self) -> usize {
        self.processed
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Outcome::Trimmed { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.processed.len() - self.trimmed()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs [`trim_file`] over a list of paths, one at a time.
pub struct Batch {
    options: TrimOptions,
}

impl Batch {
    pub fn new(options: TrimOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TrimOptions {
        &self.options
    }

    /// Trim every path in order, writing each path as a line to `progress`
    /// before it is processed.
    ///
    /// With [`ErrorPolicy::Abort`] the first failure is returned and later
    /// paths are never opened. Files processed before the failure stay
    /// overwritten.
    pub fn run<W: Write>(&self, paths: &[PathBuf], progress: &mut W) -> Result<BatchReport, TrimError> {
        let mut report = BatchReport::default();

        for path in paths {
            writeln!(progress, "{}", path.display())?;
            progress.flush()?;

            match trim_file(path, &self.options) {
                Ok(outcome) => report.processed.push((path.clone(), outcome)),
                Err(err) => match self.options.on_error {
                    ErrorPolicy::Abort => return Err(err),
                    ErrorPolicy::Continue => {
                        log::error!("{}", err);
                        report.failures.push(err);
                    }
                },
            }
        }

        log::info!(
            "Trimmed {} file(s), skipped {}, failed {}",
            report.trimmed(),
            report.skipped(),
            report.failures.len()
        );

        Ok(report)
    }
}

/// Find every PNG under `root` and trim them in discovery order.
pub fn trim_tree<W: Write>(
    root: impl AsRef<Path>,
    options: &TrimOptions,
    progress: &mut W,
) -> Result<BatchReport, TrimError> {
    let paths = find_pngs(root)?;
    Batch::new(options.clone()).run(&paths, progress)
}
