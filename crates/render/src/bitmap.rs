//! 内置点阵字体
//!
//! 找不到 TrueType 字体时使用，8x8 像素一个字符格。

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

/// 每个字符占用的像素宽度（同时也是字形高度）
const BITMAP_CELL: i32 = 8;

fn glyph(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c))
}

/// 以 (x, y) 为左上角绘制点阵文字
///
/// 没有字形的字符留空一格，超出画布的像素直接裁掉。
pub fn draw_bitmap_text(image: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
    let (width, height) = (image.width() as i32, image.height() as i32);

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let origin_x = x + i as i32 * BITMAP_CELL;

        for (row, bits) in rows.iter().enumerate() {
            let py = y + row as i32;
            if !(0..height).contains(&py) {
                continue;
            }
            // 低位在左
            for col in 0..BITMAP_CELL {
                if *bits & (1u8 << col) == 0 {
                    continue;
                }
                let px = origin_x + col;
                if (0..width).contains(&px) {
                    image.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

/// 点阵文字的像素宽度
#[cfg(test)]
pub(crate) fn bitmap_text_width(text: &str) -> u32 {
    text.chars().count() as u32 * BITMAP_CELL as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb<u8> = Rgb([0, 0, 139]);

    fn inked(image: &RgbImage) -> Vec<(u32, u32)> {
        image
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == INK)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_glyph_stays_inside_its_cell() {
        let mut image = RgbImage::from_pixel(64, 64, Rgb([255, 255, 255]));
        draw_bitmap_text(&mut image, 10, 20, "A", INK);

        let pixels = inked(&image);
        assert!(!pixels.is_empty());
        for (x, y) in pixels {
            assert!((10..18).contains(&x), "x out of cell: {x}");
            assert!((20..28).contains(&y), "y out of cell: {y}");
        }
    }

    #[test]
    fn test_space_and_unknown_chars_draw_nothing() {
        let mut image = RgbImage::from_pixel(64, 16, Rgb([255, 255, 255]));
        draw_bitmap_text(&mut image, 0, 0, " 中", INK);
        assert!(inked(&image).is_empty());
    }

    #[test]
    fn test_clipped_at_canvas_edges() {
        let mut image = RgbImage::from_pixel(16, 16, Rgb([255, 255, 255]));
        draw_bitmap_text(&mut image, -4, -4, "WW", INK);
        draw_bitmap_text(&mut image, 12, 12, "WW", INK);
        assert!(!inked(&image).is_empty());
    }

    #[test]
    fn test_width_is_per_char() {
        assert_eq!(bitmap_text_width("Hello"), 40);
        assert_eq!(bitmap_text_width("é"), 8);
    }
}
