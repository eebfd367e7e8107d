//! 手写样张合成
//!
//! 读取文本 → 排版 → 绘制 → 写出 PNG → 回读校验。

use image::Rgb;
use linch_render::{Canvas, FontKind, FontSource};
use linch_verify::{verify_output, VerifyOptions, VerifyResult};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::SynthConfig;
use crate::layout::plan_layout;
use crate::{CoreError, Result};

/// 合成结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthOutcome {
    pub output_path: PathBuf,
    /// 实际绘制的折行数
    pub lines_drawn: usize,
    /// 因版面用尽而丢弃的折行数
    pub lines_dropped: usize,
    pub font: FontKind,
    pub verify: VerifyResult,
}

/// 手写风格图片合成器
pub struct ImageSynthesizer {
    config: SynthConfig,
}

impl ImageSynthesizer {
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    /// 生成图片并返回结果
    ///
    /// 输入文件不存在时返回 [`CoreError::InputNotFound`]，此时不会写出任何文件。
    pub fn synthesize(&self) -> Result<SynthOutcome> {
        let start = Instant::now();
        let config = &self.config;

        let text = read_input(&config.input_path)?;
        let plan = plan_layout(&text, config);
        log::info!(
            "[Synth] 排版完成: {} 行绘制, {} 行丢弃",
            plan.ops.len(),
            plan.dropped
        );

        let font = FontSource::load(&config.font_name, config.font_size, &config.font_dirs);
        let color = Rgb(config.text_color);

        let mut canvas = Canvas::blank(config.width, config.height, Rgb(config.background));
        for op in &plan.ops {
            canvas.draw_text(op.x, op.y, &op.text, color, &font);
        }
        canvas.save_png(&config.output_path)?;

        let verify = verify_output(
            &config.output_path,
            &VerifyOptions {
                width: config.width,
                height: config.height,
            },
        )?;

        log::info!(
            "[Synth] 已生成 {}，耗时: {} ms",
            config.output_path.display(),
            start.elapsed().as_millis()
        );

        Ok(SynthOutcome {
            output_path: config.output_path.clone(),
            lines_drawn: plan.ops.len(),
            lines_dropped: plan.dropped,
            font: font.kind(),
            verify,
        })
    }
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CoreError::InputNotFound(path.to_path_buf()),
        _ => CoreError::Io(e),
    })
}
