use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "webp"];

/// 入力画像を検査する（モデル読み込み前に弾く）
pub fn inspect_image(path: &Path) -> Result<ImageInfo> {
    if !path.is_file() {
        return Err(ScanError::FileNotFound(path.display().to_string()));
    }

    let supported = path
        .extension()
        .map(|ext| is_image_extension(&ext.to_string_lossy()))
        .unwrap_or(false);

    if !supported {
        return Err(ScanError::UnsupportedFormat(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ImageInfo {
        path: path.to_path_buf(),
        file_name,
    })
}

/// Check if a file extension is a supported image format
fn is_image_extension(ext: &str) -> bool {
    let lower = ext.to_lowercase();
    IMAGE_EXTENSIONS.contains(&lower.as_str())
}
