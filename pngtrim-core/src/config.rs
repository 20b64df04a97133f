//! Batch configuration types

/// What to do when a file fails to decode, trim or save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first failing file and return its error.
    #[default]
    Abort,
    /// Log the failure, record it in the report and move on.
    Continue,
}

/// What to do with an image that has no visible content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlankPolicy {
    /// Treat a blank image as an error.
    #[default]
    Fail,
    /// Leave the file untouched.
    Skip,
}

/// Options controlling a trim run.
#[derive(Clone, Debug, Default)]
pub struct TrimOptions {
    /// Behavior on per-file failures.
    pub on_error: ErrorPolicy,
    /// Behavior on fully blank images.
    pub on_blank: BlankPolicy,
}

impl TrimOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep processing remaining files after a failure.
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.on_error = if keep_going {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Abort
        };
        self
    }

    /// Leave blank images alone instead of failing on them.
    pub fn with_skip_blank(mut self, skip_blank: bool) -> Self {
        self.on_blank = if skip_blank {
            BlankPolicy::Skip
        } else {
            BlankPolicy::Fail
        };
        self
    }
}
