//! 集計ロジック
//!
//! 生ラベル列 → カテゴリ別件数 → 単価・合計・エコスコア

use crate::category::Category;
use crate::normalizer::normalize_label;
use crate::pricing::PriceTable;
use crate::types::{ItemSummary, ScanResult};

/// 出力の fabric 欄（固定）
pub const FABRIC_LABEL: &str = "Mixed garments";

/// 検出ゼロ時に代わりに計上する品目
pub const FALLBACK_CATEGORY: Category = Category::Other;
pub const FALLBACK_COUNT: usize = 1;
pub const FALLBACK_PRICE_PER_PIECE: u32 = 12;

pub const ECO_SCORE_MIN: u32 = 55;
pub const ECO_SCORE_MAX: u32 = 98;

/// 標準単価表で集計する
pub fn aggregate<S: AsRef<str>>(labels: &[S]) -> ScanResult {
    aggregate_with(labels, &PriceTable::standard())
}

/// 指定の単価表で集計する
///
/// カテゴリは最初に出現した順に並ぶ。検出が1件もなければ
/// `other` 1点（単価12）を計上する。
pub fn aggregate_with<S: AsRef<str>>(labels: &[S], prices: &PriceTable) -> ScanResult {
    let mut counts: Vec<(Category, usize)> = Vec::new();

    for label in labels {
        let category = normalize_label(label.as_ref());
        match counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, n)) => *n += 1,
            None => counts.push((category, 1)),
        }
    }

    let mut items: Vec<ItemSummary> = counts
        .into_iter()
        .map(|(category, count)| ItemSummary {
            category,
            count,
            price_per_piece: prices.price_for(category),
        })
        .collect();

    let mut total_count: usize = items.iter().map(|i| i.count).sum();
    let mut total_price: u64 = items.iter().map(ItemSummary::subtotal).sum();

    if total_count == 0 {
        items = vec![ItemSummary {
            category: FALLBACK_CATEGORY,
            count: FALLBACK_COUNT,
            price_per_piece: FALLBACK_PRICE_PER_PIECE,
        }];
        total_count = FALLBACK_COUNT;
        total_price = FALLBACK_COUNT as u64 * FALLBACK_PRICE_PER_PIECE as u64;
    }

    ScanResult {
        fabric: FABRIC_LABEL.to_string(),
        count: total_count,
        price: total_price,
        eco_score: format_eco_score(eco_score(total_count)),
        items,
        raw_items: labels.iter().map(|l| l.as_ref().to_string()).collect(),
    }
}

/// 点数からエコスコアを算出（55〜98にクランプ）
pub fn eco_score(total_count: usize) -> u32 {
    let raw = 100usize.saturating_sub(total_count.saturating_mul(2));
    raw.clamp(ECO_SCORE_MIN as usize, ECO_SCORE_MAX as usize) as u32
}

pub fn format_eco_score(score: u32) -> String {
    format!("{}%", score)
}
