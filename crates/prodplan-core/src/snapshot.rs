//! 庫存快照模型

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::material::RawMaterial;

/// 庫存快照
///
/// 原物料ID → 剩餘數量的臨時映射，僅存在於單次建議計算中，
/// 計算結束即丟棄，永不寫回原物料庫存。
/// 扣料時不在零點截斷，剩餘數量允許為負值。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockSnapshot {
    remaining: HashMap<u64, Decimal>,
}

impl StockSnapshot {
    /// 創建空的庫存快照
    pub fn new() -> Self {
        Self {
            remaining: HashMap::new(),
        }
    }

    /// 從原物料清單建立快照（空清單建立空快照，不視為錯誤）
    pub fn from_materials(materials: &[RawMaterial]) -> Self {
        Self {
            remaining: materials
                .iter()
                .map(|m| (m.id, m.stock_quantity))
                .collect(),
        }
    }

    /// 查詢原物料剩餘數量（不存在回傳 None）
    pub fn available(&self, material_id: u64) -> Option<Decimal> {
        self.remaining.get(&material_id).copied()
    }

    /// 扣減原物料剩餘數量
    ///
    /// 僅在該原物料存在於快照時扣減；結果可能為負值。
    pub fn consume(&mut self, material_id: u64, quantity: Decimal) {
        if let Some(stock) = self.remaining.get_mut(&material_id) {
            *stock -= quantity;
        }
    }

    /// 快照中的原物料筆數
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// 檢查快照是否為空
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_materials() {
        let materials = vec![
            RawMaterial::new(1, "A", "物料A", Decimal::from(100)),
            RawMaterial::new(2, "B", "物料B", Decimal::from(60)),
        ];

        let snapshot = StockSnapshot::from_materials(&materials);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.available(1), Some(Decimal::from(100)));
        assert_eq!(snapshot.available(2), Some(Decimal::from(60)));
        assert_eq!(snapshot.available(99), None);
    }

    #[test]
    fn test_empty_materials_build_empty_snapshot() {
        let snapshot = StockSnapshot::from_materials(&[]);

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.available(1), None);
    }

    #[test]
    fn test_consume() {
        let materials = vec![RawMaterial::new(1, "A", "物料A", Decimal::from(100))];
        let mut snapshot = StockSnapshot::from_materials(&materials);

        snapshot.consume(1, Decimal::from(30));
        assert_eq!(snapshot.available(1), Some(Decimal::from(70)));

        // 不存在的原物料：不動作
        snapshot.consume(99, Decimal::from(10));
        assert_eq!(snapshot.available(99), None);
    }

    #[test]
    fn test_consume_may_go_negative() {
        let materials = vec![RawMaterial::new(1, "A", "物料A", Decimal::from(20))];
        let mut snapshot = StockSnapshot::from_materials(&materials);

        snapshot.consume(1, Decimal::from(50));

        // 不在零點截斷，後續讀取會看到負值
        assert_eq!(snapshot.available(1), Some(Decimal::from(-30)));
    }
}
