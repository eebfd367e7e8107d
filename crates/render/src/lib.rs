//! 画布渲染
//!
//! 提供白底画布、文字绘制和 PNG 输出。TrueType 文字由 imageproc
//! 绘制，找不到字体时用内置点阵字体代替。

mod bitmap;
mod error;
mod font;

pub use error::RenderError;
pub use font::{default_font_dirs, font_candidates, FontKind, FontSource};

use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use std::path::Path;

pub type Result<T> = std::result::Result<T, RenderError>;

/// 可绘制的 RGB 画布
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// 创建纯色画布
    pub fn blank(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// 在 (x, y) 处绘制单行文字，y 为文字顶部
    ///
    /// 不处理换行，超出画布的部分被裁掉。
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb<u8>, font: &FontSource) {
        match font {
            FontSource::TrueType { font, scale, .. } => {
                draw_text_mut(&mut self.image, color, x, y, *scale, font, text);
            }
            FontSource::Builtin => bitmap::draw_bitmap_text(&mut self.image, x, y, text, color),
        }
    }

    /// 保存为 PNG，已存在的文件会被覆盖
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        log::debug!(
            "[Render] 已写入 {} ({}x{})",
            path.display(),
            self.width(),
            self.height()
        );
        Ok(())
    }

    #[cfg(test)]
    fn image(&self) -> &RgbImage {
        &self.image
    }
}
