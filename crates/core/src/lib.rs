//! Core orchestration for handwritten sample synthesis.

pub mod config;
pub mod layout;
pub mod synth;

pub use config::{SynthConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use layout::{jitter_offset, plan_layout, DrawOp, LayoutPlan};
pub use synth::{ImageSynthesizer, SynthOutcome};

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{} not found", .0.display())]
    InputNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("render error: {0}")]
    Render(#[from] linch_render::RenderError),
    #[error("verify error: {0}")]
    Verify(#[from] linch_verify::VerifyError),
}
