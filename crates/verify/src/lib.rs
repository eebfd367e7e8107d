//! Post-write verification of generated images.

use image::ColorType;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("cannot read output image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOptions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResult {
    pub ok: bool,
    pub warnings: Vec<String>,
}

/// Re-open the written PNG and compare it against the expected geometry.
///
/// Mismatches are reported as warnings, only an unreadable file is an error.
pub fn verify_output(output_path: &Path, options: &VerifyOptions) -> Result<VerifyResult, VerifyError> {
    let img = image::open(output_path)?;
    let mut warnings = Vec::new();

    if (img.width(), img.height()) != (options.width, options.height) {
        warnings.push(format!(
            "expected {}x{}, found {}x{}",
            options.width,
            options.height,
            img.width(),
            img.height()
        ));
    }
    if img.color() != ColorType::Rgb8 {
        warnings.push(format!("expected Rgb8, found {:?}", img.color()));
    }

    for warning in &warnings {
        log::warn!("[Verify] {}: {}", output_path.display(), warning);
    }

    Ok(VerifyResult {
        ok: warnings.is_empty(),
        warnings,
    })
}
