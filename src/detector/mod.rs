//! 物体検出
//!
//! 画像パスを受け取り、検出インスタンスごとの生ラベルを返す。
//! 集計側は `Detector` だけに依存するので、モデルなしでも検証できる。

mod labels;
mod yolo;

pub use labels::{class_name, load_class_names, COCO_CLASS_NAMES};
pub use yolo::{
    decode_predictions, iou, non_max_suppression, to_input_tensor, Detection, YoloDetector,
    YoloParams,
};

use crate::error::Result;
use std::path::Path;

pub trait Detector {
    /// 1インスタンス1ラベル。順序は保証しない
    fn detect(&self, image: &Path) -> Result<Vec<String>>;
}

/// 固定のラベル列を返す検出器
#[derive(Debug, Clone, Default)]
pub struct FixedLabels {
    labels: Vec<String>,
}

impl FixedLabels {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl Detector for FixedLabels {
    fn detect(&self, _image: &Path) -> Result<Vec<String>> {
        Ok(self.labels.clone())
    }
}
