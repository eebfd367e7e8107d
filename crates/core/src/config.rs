//! 合成参数
//!
//! 所有取值都是固定的默认值，程序本身不接受任何参数。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "sample-advisory-minutes.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "sample-handwritten-advisory-minutes.png";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthConfig {
    // ============ 文件 ============
    /// 输入文本路径（相对工作目录）
    pub input_path: PathBuf,
    /// 输出 PNG 路径（相对工作目录）
    pub output_path: PathBuf,

    // ============ 画布 ============
    pub width: u32,
    pub height: u32,
    /// 底色
    pub background: [u8; 3],
    /// 墨水颜色（深蓝，模拟钢笔）
    pub text_color: [u8; 3],

    // ============ 字体 ============
    /// 首选字体文件名
    pub font_name: String,
    /// 字号（像素）
    pub font_size: f32,
    /// 按顺序搜索的字体目录
    pub font_dirs: Vec<PathBuf>,

    // ============ 排版 ============
    pub line_height: u32,
    pub top_margin: u32,
    pub bottom_margin: u32,
    pub left_margin: u32,
    /// 水平抖动的取值个数，偏移落在 [left_margin, left_margin + jitter_span)
    pub jitter_span: u32,
    /// 折行列宽（字符数）
    pub wrap_width: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            width: 800,
            height: 1200,
            background: [255, 255, 255],
            text_color: [0, 0, 139],
            font_name: "Arial.ttf".to_string(),
            font_size: 14.0,
            font_dirs: linch_render::default_font_dirs(),
            line_height: 20,
            top_margin: 30,
            bottom_margin: 30,
            left_margin: 30,
            jitter_span: 5,
            wrap_width: linch_text::DEFAULT_WRAP_WIDTH,
        }
    }
}

impl SynthConfig {
    /// 光标到达该位置后不再绘制
    pub fn drawable_limit(&self) -> i32 {
        self.height as i32 - self.bottom_margin as i32
    }
}
