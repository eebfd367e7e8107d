//! 排版规划
//!
//! 把输入文本转换成一组带坐标的绘制指令，不接触画布，便于单独测试。

use linch_text::{is_blank, split_lines, wrap};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SynthConfig;

/// 一次文字绘制
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOp {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// 整页的绘制计划
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// 按绘制顺序排列
    pub ops: Vec<DrawOp>,
    /// 因版面用尽而丢弃的折行数
    pub dropped: usize,
    /// 处理完所有行后的光标位置
    pub cursor: i32,
}

/// 根据文本内容计算稳定的水平偏移
///
/// 取 SHA-256 前 8 字节（大端）对 `span` 取模，同样的文本在任何平台、
/// 任何一次运行中都得到同样的偏移。
pub fn jitter_offset(text: &str, base: u32, span: u32) -> i32 {
    let digest = Sha256::digest(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let hash = u64::from_be_bytes(head);

    base as i32 + (hash % u64::from(span.max(1))) as i32
}

/// 生成绘制计划
///
/// - 空行只推进半个行高
/// - 非空行按列宽折行，每个子行在光标未越过下边界时绘制并推进一个行高
/// - 光标只增不减，一旦越界后续内容全部丢弃
pub fn plan_layout(text: &str, config: &SynthConfig) -> LayoutPlan {
    let limit = config.drawable_limit();
    let line_height = config.line_height as i32;

    let mut plan = LayoutPlan {
        cursor: config.top_margin as i32,
        ..Default::default()
    };

    for line in split_lines(text) {
        if is_blank(line) {
            plan.cursor += line_height / 2;
            continue;
        }

        for sub_line in wrap(line, config.wrap_width) {
            if plan.cursor >= limit {
                plan.dropped += 1;
                continue;
            }
            let x = jitter_offset(&sub_line, config.left_margin, config.jitter_span);
            plan.ops.push(DrawOp {
                text: sub_line,
                x,
                y: plan.cursor,
            });
            plan.cursor += line_height;
        }
    }

    plan
}
