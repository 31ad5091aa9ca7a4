//! Command handlers

use crate::analyzer::{analyze, analyze_labels};
use crate::cli::Cli;
use crate::config::Config;
use crate::detector::{Detector, YoloDetector};
use crate::error::{Result, ScanError};
use crate::output::{render, write_output};
use crate::scanner::inspect_image;
use garment_scan_common::{parse_labels, ScanResult};
use std::path::Path;

/// Execute CLI command
pub fn execute(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, cli)?;

    let json = if cli.show_config {
        serde_json::to_string_pretty(&config)?
    } else {
        let result = match &cli.labels {
            Some(path) => scan_labels_file(path)?,
            None => {
                let image = cli.image.as_deref().ok_or(ScanError::MissingImagePath)?;
                scan_image(image, || YoloDetector::load(&config), cli.verbose)?
            }
        };
        render(&result, cli.pretty)?
    };

    write_output(&json, cli.output.as_deref())
}

/// CLI引数で設定を上書き
pub fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(model) = &cli.model {
        config.model_path = model.clone();
    }
    if let Some(confidence) = cli.confidence {
        config.confidence_threshold = confidence;
    }
    config.validate()
}

/// 画像を検査してから検出器を作り、検出・集計する
///
/// 検査に失敗した場合、`load_detector` は呼ばれない（モデルを読まない）
pub fn scan_image<D, F>(image: &Path, load_detector: F, show_progress: bool) -> Result<ScanResult>
where
    D: Detector,
    F: FnOnce() -> Result<D>,
{
    let info = inspect_image(image)?;
    tracing::debug!("scanning {}", info.file_name);

    let detector = load_detector()?;
    analyze(&detector, &info.path, show_progress)
}

/// 記録済みラベル（JSON）から集計
pub fn scan_labels_file(path: &Path) -> Result<ScanResult> {
    if !path.exists() {
        return Err(ScanError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let labels = parse_labels(&content)?;
    tracing::info!("{} labels read from {}", labels.len(), path.display());

    Ok(analyze_labels(&labels))
}
