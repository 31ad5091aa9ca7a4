//! 衣類カテゴリ
//!
//! 価格計算とレポートに使う固定の5分類

use serde::{Deserialize, Serialize};

/// 正規化後の衣類カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shirt,
    Pant,
    Saree,
    Uniform,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Shirt => "shirt",
            Category::Pant => "pant",
            Category::Saree => "saree",
            Category::Uniform => "uniform",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Category::Uniform).unwrap();
        assert_eq!(json, "\"uniform\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let category: Category = serde_json::from_str("\"saree\"").unwrap();
        assert_eq!(category, Category::Saree);
        assert!(serde_json::from_str::<Category>("\"sock\"").is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        for category in [
            Category::Shirt,
            Category::Pant,
            Category::Saree,
            Category::Uniform,
            Category::Other,
        ] {
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
