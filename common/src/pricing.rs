//! 単価表

use crate::category::Category;
use std::collections::BTreeMap;

/// 表にないカテゴリの単価
pub const DEFAULT_PRICE: u32 = 12;

/// カテゴリ別の1点あたり単価
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    prices: BTreeMap<Category, u32>,
    default_price: u32,
}

impl PriceTable {
    /// 標準の単価表
    pub fn standard() -> Self {
        let prices = BTreeMap::from([
            (Category::Shirt, 15),
            (Category::Pant, 20),
            (Category::Saree, 50),
            (Category::Uniform, 15),
            (Category::Other, 12),
        ]);

        Self {
            prices,
            default_price: DEFAULT_PRICE,
        }
    }

    /// 指定カテゴリを除いた表を作る（既定単価の経路を通すため）
    pub fn without(&self, category: Category) -> Self {
        let mut prices = self.prices.clone();
        prices.remove(&category);
        Self {
            prices,
            default_price: self.default_price,
        }
    }

    pub fn price_for(&self, category: Category) -> u32 {
        self.prices
            .get(&category)
            .copied()
            .unwrap_or(self.default_price)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}
