//! 渲染错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("字体解析失败: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("图像编码失败: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}
