//! 手写样张生成入口
//!
//! 按固定路径读取文本、生成图片，并在控制台输出结果。

use linch_core::{CoreError, ImageSynthesizer, SynthConfig};
use std::io::Write;
use std::path::PathBuf;

/// 生成手写风格样张
///
/// 输入文件缺失时只输出一行错误并返回 `None`，其余错误向上传递。
pub fn create_handwritten_image(
    config: SynthConfig,
    out: &mut impl Write,
) -> anyhow::Result<Option<PathBuf>> {
    let synthesizer = ImageSynthesizer::new(config);

    let outcome = match synthesizer.synthesize() {
        Ok(outcome) => outcome,
        Err(err @ CoreError::InputNotFound(_)) => {
            writeln!(out, "Error: {}", err)?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    log::info!("[Startup] 字体: {:?}", outcome.font);
    writeln!(
        out,
        "✅ Sample handwritten-style image created: {}",
        outcome.output_path.display()
    )?;
    writeln!(
        out,
        "📁 You can now upload this image to test the OCR and AI analysis"
    )?;

    Ok(Some(outcome.output_path))
}

pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut stdout = std::io::stdout().lock();
    create_handwritten_image(SynthConfig::default(), &mut stdout)?;
    Ok(())
}
