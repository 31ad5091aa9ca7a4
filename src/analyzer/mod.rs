//! 検出 → 集計

use crate::detector::Detector;
use crate::error::Result;
use garment_scan_common::{aggregate, ScanResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// 画像1枚を検出・集計する
pub fn analyze<D: Detector + ?Sized>(
    detector: &D,
    image: &Path,
    show_progress: bool,
) -> Result<ScanResult> {
    let spinner = if show_progress {
        Some(start_spinner(image))
    } else {
        None
    };

    let detected = detector.detect(image);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let labels = detected?;
    tracing::info!("{}: {} objects detected", image.display(), labels.len());

    Ok(analyze_labels(&labels))
}

/// 検出済みラベルから集計する（モデル不要）
pub fn analyze_labels<S: AsRef<str>>(labels: &[S]) -> ScanResult {
    let result = aggregate(labels);

    if labels.is_empty() {
        tracing::warn!("no detections; billing one fallback item");
    }
    for item in &result.items {
        tracing::debug!(
            "{}: {} x {} = {}",
            item.category,
            item.count,
            item.price_per_piece,
            item.subtotal()
        );
    }

    result
}

fn start_spinner(image: &Path) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("検出中: {}", image.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
