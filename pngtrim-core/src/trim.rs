//! Cropping an image to its visible content

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::bounds::content_bounds;
use crate::config::{BlankPolicy, TrimOptions};
use crate::error::TrimError;

/// Result of trimming a single file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The file was cropped and written back.
    Trimmed {
        before: (u32, u32),
        after: (u32, u32),
    },
    /// The image had no visible content and was left untouched.
    SkippedBlank,
}

impl Outcome {
    /// Whether the image lost any pixels.
    pub fn changed_size(&self) -> bool {
        match self {
            Outcome::Trimmed { before, after } => before != after,
            Outcome::SkippedBlank => false,
        }
    }
}

/// Crop `img` to the bounding box of its content.
///
/// The crop keeps the source color type and bit depth. Returns `None` when
/// the image is blank.
pub fn trim_image(img: &DynamicImage) -> Option<DynamicImage> {
    let bounds = content_bounds(img)?;
    Some(img.crop_imm(bounds.left, bounds.top, bounds.width(), bounds.height()))
}

/// Trim the image at `path` in place.
///
/// The file is overwritten using the format implied by its extension. No
/// backup is kept.
pub fn trim_file(path: impl AsRef<Path>, options: &TrimOptions) -> Result<Outcome, TrimError> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| TrimError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let before = img.dimensions();

    let cropped = match trim_image(&img) {
        Some(cropped) => cropped,
        None => match options.on_blank {
            BlankPolicy::Fail => {
                return Err(TrimError::EmptyImage {
                    path: path.to_path_buf(),
                })
            }
            BlankPolicy::Skip => {
                log::warn!("Skipping blank image: {}", path.display());
                return Ok(Outcome::SkippedBlank);
            }
        },
    };
    let after = cropped.dimensions();

    cropped.save(path).map_err(|source| TrimError::Save {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Trimmed {}: {}x{} -> {}x{}",
        path.display(),
        before.0,
        before.1,
        after.0,
        after.1
    );

    Ok(Outcome::Trimmed { before, after })
}
