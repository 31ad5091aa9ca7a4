//! ラベル正規化
//!
//! 検出器が返す生ラベルを、キーワードの部分一致で5分類のどれかに割り当てる。
//! ルールは上から順に評価し、最初に一致したものを採用する。

use crate::category::Category;

/// 判定ルール（評価順）
pub const KEYWORD_RULES: &[(&[&str], Category)] = &[
    (&["shirt", "jersey", "top"], Category::Shirt),
    (&["pant", "trouser", "jean"], Category::Pant),
    (&["saree"], Category::Saree),
    (&["uniform", "coat", "blazer"], Category::Uniform),
];

/// 生ラベルをカテゴリに変換する
///
/// 大文字小文字は区別しない。どのルールにも一致しなければ `Other`。
pub fn normalize_label(label: &str) -> Category {
    let lower = label.to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
