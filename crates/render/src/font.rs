//! 字体查找
//!
//! 按名称在工作目录和字体目录（递归）中查找 TrueType 字体，
//! 任何失败都静默回退到内置点阵字体。

use ab_glyph::{FontVec, PxScale};
use fontdb::{Database, Source};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

#[cfg(target_os = "windows")]
const SYSTEM_FONT_DIRS: &[&str] = &["C:\\Windows\\Fonts"];

#[cfg(target_os = "macos")]
const SYSTEM_FONT_DIRS: &[&str] = &["/Library/Fonts", "/System/Library/Fonts"];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const SYSTEM_FONT_DIRS: &[&str] = &["/usr/share/fonts", "/usr/local/share/fonts"];

/// 已加载的字体
pub enum FontSource {
    /// TrueType 字体及其像素缩放
    TrueType {
        font: FontVec,
        scale: PxScale,
        path: PathBuf,
    },
    /// 内置 8x8 点阵字体
    Builtin,
}

/// 字体来源摘要（用于日志和结果上报）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FontKind {
    TrueType { path: PathBuf, size: f32 },
    Builtin,
}

impl FontSource {
    /// 按名称查找字体，找不到时回退到内置字体
    pub fn load(name: &str, size: f32, font_dirs: &[PathBuf]) -> Self {
        for candidate in font_candidates(name, font_dirs) {
            match read_font(&candidate) {
                Ok(font) => {
                    log::debug!("[Font] 使用字体: {}", candidate.display());
                    return Self::TrueType {
                        font,
                        scale: PxScale::from(size),
                        path: candidate,
                    };
                }
                Err(e) => log::trace!("[Font] 跳过 {}: {}", candidate.display(), e),
            }
        }

        log::debug!("[Font] 未找到 {}，使用内置点阵字体", name);
        Self::Builtin
    }

    pub fn kind(&self) -> FontKind {
        match self {
            Self::TrueType { scale, path, .. } => FontKind::TrueType {
                path: path.clone(),
                size: scale.y,
            },
            Self::Builtin => FontKind::Builtin,
        }
    }
}

fn read_font(path: &Path) -> Result<FontVec, RenderError> {
    let bytes = std::fs::read(path)?;
    Ok(FontVec::try_from_vec(bytes)?)
}

/// 候选路径
///
/// 先按工作目录下的相对路径，再按目录顺序列出各字体目录（含子目录）中
/// 文件名与 `name` 相同的字体文件。
pub fn font_candidates(name: &str, font_dirs: &[PathBuf]) -> Vec<PathBuf> {
    let file_name = Path::new(name).file_name().unwrap_or(OsStr::new(name));

    let mut db = Database::new();
    for dir in font_dirs {
        db.load_fonts_dir(dir);
    }

    let mut candidates = vec![PathBuf::from(name)];
    for face in db.faces() {
        let path = match &face.source {
            Source::File(path) | Source::SharedFile(path, _) => path,
            Source::Binary(_) => continue,
        };
        if path.file_name() == Some(file_name) && !candidates.contains(path) {
            candidates.push(path.clone());
        }
    }

    candidates
}

/// 当前平台的默认字体目录
pub fn default_font_dirs() -> Vec<PathBuf> {
    let mut font_dirs = Vec::new();
    if let Some(dir) = dirs::font_dir() {
        font_dirs.push(dir);
    }
    if let Some(home) = dirs::home_dir() {
        font_dirs.push(home.join(".fonts"));
    }
    font_dirs.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
    font_dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 只含 head/hhea/maxp/name 四张表的最小 TrueType 字体
    fn minimal_font(family: &str) -> Vec<u8> {
        let mut head = vec![0u8; 54];
        head[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
        head[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes());
        head[18..20].copy_from_slice(&1000u16.to_be_bytes());

        let mut hhea = vec![0u8; 36];
        hhea[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
        hhea[4..6].copy_from_slice(&800i16.to_be_bytes());
        hhea[6..8].copy_from_slice(&(-200i16).to_be_bytes());
        hhea[34..36].copy_from_slice(&1u16.to_be_bytes());

        let mut maxp = Vec::new();
        maxp.extend_from_slice(&0x0000_5000u32.to_be_bytes());
        maxp.extend_from_slice(&1u16.to_be_bytes());

        let family: Vec<u8> = family.encode_utf16().flat_map(u16::to_be_bytes).collect();
        let mut name = Vec::new();
        // format, count, string offset
        for v in [0u16, 1, 18] {
            name.extend_from_slice(&v.to_be_bytes());
        }
        // Windows / Unicode BMP / en-US / family name
        for v in [3u16, 1, 0x0409, 1, family.len() as u16, 0] {
            name.extend_from_slice(&v.to_be_bytes());
        }
        name.extend_from_slice(&family);

        let tables: [(&[u8; 4], Vec<u8>); 4] =
            [(b"head", head), (b"hhea", hhea), (b"maxp", maxp), (b"name", name)];

        let mut font = Vec::new();
        font.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        for v in [tables.len() as u16, 64, 2, 0] {
            font.extend_from_slice(&v.to_be_bytes());
        }

        let mut data = Vec::new();
        let mut offset = 12 + 16 * tables.len();
        for (tag, table) in &tables {
            font.extend_from_slice(*tag);
            font.extend_from_slice(&0u32.to_be_bytes());
            font.extend_from_slice(&(offset as u32).to_be_bytes());
            font.extend_from_slice(&(table.len() as u32).to_be_bytes());

            data.extend_from_slice(table);
            while data.len() % 4 != 0 {
                data.push(0);
            }
            offset = 12 + 16 * tables.len() + data.len();
        }
        font.extend_from_slice(&data);
        font
    }

    #[test]
    fn test_finds_font_in_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype").join("vendor");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Handwrite-6b1f.ttf"), minimal_font("Handwrite")).unwrap();
        let dirs = vec![dir.path().to_path_buf()];

        let candidates = font_candidates("Handwrite-6b1f.ttf", &dirs);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], PathBuf::from("Handwrite-6b1f.ttf"));
        assert!(candidates[1].ends_with("truetype/vendor/Handwrite-6b1f.ttf"));

        let font = FontSource::load("Handwrite-6b1f.ttf", 14.0, &dirs);
        match font.kind() {
            FontKind::TrueType { path, size } => {
                assert!(path.ends_with("truetype/vendor/Handwrite-6b1f.ttf"));
                assert_eq!(size, 14.0);
            }
            FontKind::Builtin => panic!("nested font was not found"),
        }
    }

    #[test]
    fn test_other_file_names_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Other-6b1f.ttf"), minimal_font("Other")).unwrap();

        let candidates = font_candidates("Handwrite-6b1f.ttf", &[dir.path().to_path_buf()]);
        assert_eq!(candidates, vec![PathBuf::from("Handwrite-6b1f.ttf")]);
    }

    #[test]
    fn test_missing_font_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let font = FontSource::load("no-such-font-6b1f.ttf", 14.0, &[dir.path().to_path_buf()]);
        assert_eq!(font.kind(), FontKind::Builtin);
    }

    #[test]
    fn test_unparsable_font_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("broken-6b1f.ttf"), b"definitely not a font").unwrap();
        let font = FontSource::load("broken-6b1f.ttf", 14.0, &[dir.path().to_path_buf()]);
        assert_eq!(font.kind(), FontKind::Builtin);
    }

    #[test]
    fn test_default_dirs_include_system_dirs() {
        let dirs = default_font_dirs();
        for system in SYSTEM_FONT_DIRS {
            assert!(dirs.contains(&PathBuf::from(system)));
        }
    }
}
