//! 判定結果の型定義
//!
//! CLIの標準出力にそのままJSONとして出る形

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// カテゴリごとの集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    #[serde(rename = "type")]
    pub category: Category,
    pub count: usize,
    pub price_per_piece: u32,
}

impl ItemSummary {
    pub fn subtotal(&self) -> u64 {
        self.count as u64 * self.price_per_piece as u64
    }
}

/// 1画像分の最終結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub fabric: String,
    pub count: usize,
    pub price: u64,
    /// "91%" 形式
    pub eco_score: String,
    pub items: Vec<ItemSummary>,
    /// 正規化前のラベル（検出順）
    pub raw_items: Vec<String>,
}

impl ScanResult {
    /// items から数量合計を再計算
    pub fn total_from_items(&self) -> usize {
        self.items.iter().map(|i| i.count).sum()
    }

    /// items から金額合計を再計算
    pub fn price_from_items(&self) -> u64 {
        self.items.iter().map(ItemSummary::subtotal).sum()
    }
}
