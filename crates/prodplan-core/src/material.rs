//! 原物料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原物料
///
/// 庫存數量由外部 CRUD 維護，建議引擎只讀取快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// 原物料ID
    pub id: u64,

    /// 料號（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 現有庫存數量
    pub stock_quantity: Decimal,
}

impl RawMaterial {
    /// 創建新的原物料
    pub fn new(id: u64, code: impl Into<String>, name: impl Into<String>, stock_quantity: Decimal) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            stock_quantity,
        }
    }

    /// 建構器模式：設置庫存數量
    pub fn with_stock_quantity(mut self, stock_quantity: Decimal) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// 檢查是否有可用庫存
    pub fn has_stock(&self) -> bool {
        self.stock_quantity > Decimal::ZERO
    }
}
