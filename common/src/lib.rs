//! Garment Scan Common Library
//!
//! 検出ラベルの正規化・単価計算・集計（モデル非依存）

pub mod aggregator;
pub mod category;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod pricing;
pub mod types;

pub use aggregator::{aggregate, aggregate_with, eco_score, format_eco_score, FABRIC_LABEL};
pub use category::Category;
pub use error::{Error, Result};
pub use normalizer::normalize_label;
pub use parser::parse_labels;
pub use pricing::PriceTable;
pub use types::{ItemSummary, ScanResult};
