//! YOLOv8 検出器（rten）
//!
//! ## 処理フロー
//! 1. 画像を正方形入力サイズにリサイズし、[0,1] の NCHW テンソルへ
//! 2. 推論（出力: `[1, 4 + クラス数, アンカー数]`）
//! 3. 信頼度で足切り → クラス別NMS
//! 4. クラスIDを名前に変換
//!
//! 矩形はNMSにだけ使い、呼び出し側にはラベルしか返さない。

use super::labels::{class_name, load_class_names, COCO_CLASS_NAMES};
use super::Detector;
use crate::config::Config;
use crate::error::{Result, ScanError};
use image::imageops::FilterType;
use image::DynamicImage;
use rten::Model;
use rten_tensor::prelude::*;
use rten_tensor::NdTensor;
use std::path::Path;

/// 推論パラメータ
#[derive(Debug, Clone, PartialEq)]
pub struct YoloParams {
    pub input_size: u32,
    pub confidence_threshold: f32,
    pub iou_threshold: f32,
    pub max_detections: usize,
}

impl From<&Config> for YoloParams {
    fn from(config: &Config) -> Self {
        Self {
            input_size: config.input_size,
            confidence_threshold: config.confidence_threshold,
            iou_threshold: config.iou_threshold,
            max_detections: config.max_detections,
        }
    }
}

impl Default for YoloParams {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// 1検出（入力画像座標の xyxy）
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub class_id: usize,
    pub confidence: f32,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Detection {
    fn area(&self) -> f32 {
        (self.x2 - self.x1).max(0.0) * (self.y2 - self.y1).max(0.0)
    }
}

pub struct YoloDetector {
    model: Model,
    class_names: Vec<String>,
    params: YoloParams,
}

impl YoloDetector {
    /// 設定に従ってモデルとクラス名を読み込む
    pub fn load(config: &Config) -> Result<Self> {
        let model_path = &config.model_path;
        if !model_path.exists() {
            return Err(ScanError::ModelNotFound(model_path.display().to_string()));
        }

        tracing::debug!("loading model: {}", model_path.display());
        let model = Model::load_file(model_path)
            .map_err(|e| ScanError::ModelLoad(format!("{}: {}", model_path.display(), e)))?;

        let class_names = match &config.class_names_path {
            Some(path) => load_class_names(path)?,
            None => COCO_CLASS_NAMES.iter().map(|s| s.to_string()).collect(),
        };
        tracing::debug!("{} class names", class_names.len());

        Ok(Self {
            model,
            class_names,
            params: YoloParams::from(config),
        })
    }

    fn infer(&self, input: NdTensor<f32, 4>) -> Result<Vec<Detection>> {
        let output = self
            .model
            .run_one(input.view().into(), None)
            .map_err(|e| ScanError::Inference(e.to_string()))?;
        let output: NdTensor<f32, 3> = output
            .try_into()
            .map_err(|e| ScanError::Inference(format!("unexpected output: {}", e)))?;

        let rows = output.size(1);
        let anchors = output.size(2);
        if output.size(0) != 1 || rows <= 4 {
            return Err(ScanError::Inference(format!(
                "unexpected output shape: [{}, {}, {}]",
                output.size(0),
                rows,
                anchors
            )));
        }

        let data = output.to_vec();
        let candidates = decode_predictions(&data, rows, anchors, &self.params);
        tracing::debug!("{} candidates above threshold", candidates.len());

        Ok(non_max_suppression(
            candidates,
            self.params.iou_threshold,
            self.params.max_detections,
        ))
    }
}

impl Detector for YoloDetector {
    fn detect(&self, image: &Path) -> Result<Vec<String>> {
        let img = image::open(image)
            .map_err(|e| ScanError::ImageLoad(format!("{}: {}", image.display(), e)))?;
        tracing::debug!("image loaded: {}x{}", img.width(), img.height());

        let detections = self.infer(to_input_tensor(&img, self.params.input_size))?;

        Ok(detections
            .iter()
            .map(|d| class_name(&self.class_names, d.class_id))
            .collect())
    }
}

/// RGB画像を `[1, 3, size, size]` の f32 テンソルに変換
pub fn to_input_tensor(img: &DynamicImage, size: u32) -> NdTensor<f32, 4> {
    let resized = img.resize_exact(size, size, FilterType::Triangle).to_rgb8();

    let side = size as usize;
    let plane = side * side;
    let mut data = vec![0f32; 3 * plane];
    for (x, y, pixel) in resized.enumerate_pixels() {
        let offset = y as usize * side + x as usize;
        for c in 0..3 {
            data[c * plane + offset] = pixel[c] as f32 / 255.0;
        }
    }

    NdTensor::from_data([1, 3, side, side], data)
}

/// 生出力（行優先 `[rows, anchors]`、行 = cx, cy, w, h, クラス毎スコア...）を候補に変換
pub fn decode_predictions(
    data: &[f32],
    rows: usize,
    anchors: usize,
    params: &YoloParams,
) -> Vec<Detection> {
    if rows <= 4 || data.len() < rows * anchors {
        return Vec::new();
    }

    let at = |row: usize, anchor: usize| data[row * anchors + anchor];
    let num_classes = rows - 4;
    let mut detections = Vec::new();

    for a in 0..anchors {
        let (class_id, confidence) = (0..num_classes)
            .map(|c| (c, at(4 + c, a)))
            .fold((0, f32::MIN), |best, cur| if cur.1 > best.1 { cur } else { best });

        if confidence < params.confidence_threshold {
            continue;
        }

        let (cx, cy, w, h) = (at(0, a), at(1, a), at(2, a), at(3, a));
        detections.push(Detection {
            class_id,
            confidence,
            x1: cx - w / 2.0,
            y1: cy - h / 2.0,
            x2: cx + w / 2.0,
            y2: cy + h / 2.0,
        });
    }

    detections
}

pub fn iou(a: &Detection, b: &Detection) -> f32 {
    let ix1 = a.x1.max(b.x1);
    let iy1 = a.y1.max(b.y1);
    let ix2 = a.x2.min(b.x2);
    let iy2 = a.y2.min(b.y2);

    let inter = (ix2 - ix1).max(0.0) * (iy2 - iy1).max(0.0);
    let union = a.area() + b.area() - inter;
    if union <= 0.0 {
        return 0.0;
    }
    inter / union
}

/// クラス別NMS（信頼度の高い順に採用）
pub fn non_max_suppression(
    mut candidates: Vec<Detection>,
    iou_threshold: f32,
    max_detections: usize,
) -> Vec<Detection> {
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut kept: Vec<Detection> = Vec::new();
    for candidate in candidates {
        if kept.len() >= max_detections {
            break;
        }
        let suppressed = kept
            .iter()
            .any(|k| k.class_id == candidate.class_id && iou(k, &candidate) > iou_threshold);
        if !suppressed {
            kept.push(candidate);
        }
    }

    kept
}
