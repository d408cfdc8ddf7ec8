//! # Prodplan Calculation Engine
//!
//! 生產建議計算引擎

pub mod capacity;
pub mod depletion;
pub mod engine;

// Re-export 主要類型
pub use capacity::UNCONSTRAINED_CAP;
pub use engine::SuggestionEngine;

use chrono::{DateTime, Utc};
use prodplan_core::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 單一產品的生產建議
///
/// 衍生欄位（可生產數量、總價值）只屬於本次計算結果，不回寫產品。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSuggestion {
    /// 產品（含用料明細）
    pub product: Product,

    /// 可生產數量
    pub producible_quantity: u32,

    /// 總價值（單價 × 可生產數量）
    pub total_value: Decimal,
}

impl ProductionSuggestion {
    /// 檢查是否可生產（數量大於 0）
    pub fn is_producible(&self) -> bool {
        self.producible_quantity > 0
    }
}

/// 生產建議計算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionReport {
    /// 計算批次ID
    pub id: Uuid,

    /// 計算時間
    pub generated_at: DateTime<Utc>,

    /// 生產建議（依單價由高至低，涵蓋全部輸入產品）
    pub suggestions: Vec<ProductionSuggestion>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl SuggestionReport {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            suggestions: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 可生產建議的筆數（數量大於 0）
    pub fn producible_count(&self) -> usize {
        self.suggestions.iter().filter(|s| s.is_producible()).count()
    }

    /// 全部建議的總價值
    pub fn total_plan_value(&self) -> Decimal {
        self.suggestions.iter().map(|s| s.total_value).sum()
    }
}
