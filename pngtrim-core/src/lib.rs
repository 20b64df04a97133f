//! # pngtrim-core
//!
//! Trim transparent padding from PNG images.
//!
//! ## Features
//! - Recursive `.png` discovery under a directory
//! - Bounding box of visible content (non-zero alpha, or non-black without alpha)
//! - In-place crop that keeps color type and bit depth
//! - Abort-on-first-error by default, optional continue-on-error
//! - Blank images fail by default, optionally skipped
//!
//! ## Example
//!
//! ```no_run
//! use pngtrim_core::{trim_tree, TrimOptions};
//!
//! let options = TrimOptions::new().with_skip_blank(true);
//! let report = trim_tree("assets/sprites", &options, &mut std::io::stdout()).unwrap();
//! println!("{} trimmed", report.trimmed());
//! ```

mod batch;
mod bounds;
mod config;
mod discover;
mod error;
mod trim;

pub use batch::{trim_tree, Batch, BatchReport};
pub use bounds::{content_bounds, BoundingBox};
pub use config::{BlankPolicy, ErrorPolicy, TrimOptions};
pub use discover::{find_pngs, search_pattern};
pub use error::TrimError;
pub use trim::{trim_file, trim_image, Outcome};
