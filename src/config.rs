use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 入力サイズの上限(px)
pub const MAX_INPUT_SIZE: u32 = 4096;

/// モデルパスを上書きする環境変数
pub const MODEL_ENV_VAR: &str = "GARMENT_SCAN_MODEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model_path: PathBuf,
    /// 正方形入力の一辺(px)
    pub input_size: u32,
    pub confidence_threshold: f32,
    pub iou_threshold: f32,
    pub max_detections: usize,
    /// クラス名ファイル（1行1クラス）。未指定ならCOCO
    pub class_names_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("yolov8n.rten"),
            input_size: 640,
            confidence_threshold: 0.25,
            iou_threshold: 0.7,
            max_detections: 300,
            class_names_path: None,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数を反映する
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Ok(path) => Self::load_from(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(model) = std::env::var(MODEL_ENV_VAR) {
            if !model.trim().is_empty() {
                config.model_path = PathBuf::from(model);
            }
        }

        Ok(config)
    }

    /// 指定パスから読み込む（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ScanError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("garment-scan").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 || self.input_size % 32 != 0 || self.input_size > MAX_INPUT_SIZE {
            return Err(ScanError::Config(format!(
                "input_size は{}以下の32の倍数である必要があります: {}",
                MAX_INPUT_SIZE, self.input_size
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ScanError::Config(format!(
                "confidence_threshold は0〜1: {}",
                self.confidence_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.iou_threshold) {
            return Err(ScanError::Config(format!(
                "iou_threshold は0〜1: {}",
                self.iou_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"model_path": "/models/fashion.rten", "confidence_threshold": 0.4}"#)
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.model_path, PathBuf::from("/models/fashion.rten"));
        assert!((config.confidence_threshold - 0.4).abs() < 1e-6);
        assert_eq!(config.input_size, 640);
        assert_eq!(config.max_detections, 300);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = Config {
            confidence_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));
    }

    #[test]
    fn test_invalid_input_size_rejected() {
        let config = Config {
            input_size: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_input_rejected() {
        let config = Config {
            input_size: 65536,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));

        let config = Config {
            input_size: MAX_INPUT_SIZE,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_oversized_input_in_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"input_size": 65536}"#).unwrap();

        assert!(matches!(Config::load_from(&path), Err(ScanError::Config(_))));
    }

    #[test]
    fn test_class_names_path_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"class_names_path": "names.txt"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.class_names_path, Some(PathBuf::from("names.txt")));
    }
}
