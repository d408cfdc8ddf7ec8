//! 模擬扣料

use prodplan_core::{Product, StockSnapshot};
use rust_decimal::Decimal;

/// 依生產決策扣減庫存快照
///
/// 對每一條需求量為正的用料明細，自快照扣除「需求量 × 生產數量」。
/// 不在零點截斷：後續產品讀到的剩餘量可能為負，其貢獻值會被
/// 計算端視為 0 可用。
pub fn deplete(product: &Product, quantity: u32, snapshot: &mut StockSnapshot) {
    for line in &product.materials {
        if line.quantity_required <= 0 {
            continue;
        }

        let used = Decimal::from(line.quantity_required) * Decimal::from(quantity);
        snapshot.consume(line.material_id, used);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodplan_core::{BomLine, RawMaterial};

    fn snapshot_with(entries: &[(u64, i64)]) -> StockSnapshot {
        let materials: Vec<RawMaterial> = entries
            .iter()
            .map(|&(id, stock)| {
                RawMaterial::new(id, format!("M-{id}"), format!("物料{id}"), Decimal::from(stock))
            })
            .collect();
        StockSnapshot::from_materials(&materials)
    }

    #[test]
    fn test_deplete_subtracts_per_line() {
        let product = Product::new(1, "P-1", "產品1", Decimal::from(200)).with_materials(vec![
            BomLine::new(1, 1, 1, 10),
            BomLine::new(2, 1, 2, 5),
        ]);
        let mut snapshot = snapshot_with(&[(1, 100), (2, 60)]);

        deplete(&product, 10, &mut snapshot);

        assert_eq!(snapshot.available(1), Some(Decimal::ZERO)); // 100 - 10*10
        assert_eq!(snapshot.available(2), Some(Decimal::from(10))); // 60 - 5*10
    }

    #[test]
    fn test_deplete_skips_invalid_lines() {
        let product = Product::new(1, "P-1", "產品1", Decimal::from(100)).with_materials(vec![
            BomLine::new(1, 1, 1, -3),
            BomLine::new(2, 1, 2, 2),
        ]);
        let mut snapshot = snapshot_with(&[(1, 50), (2, 50)]);

        deplete(&product, 5, &mut snapshot);

        assert_eq!(snapshot.available(1), Some(Decimal::from(50)));
        assert_eq!(snapshot.available(2), Some(Decimal::from(40)));
    }

    #[test]
    fn test_deplete_ignores_unknown_material() {
        let product = Product::new(1, "P-1", "產品1", Decimal::from(100))
            .with_materials(vec![BomLine::new(1, 1, 99, 2)]);
        let mut snapshot = snapshot_with(&[(1, 50)]);

        deplete(&product, 5, &mut snapshot);

        assert_eq!(snapshot.available(1), Some(Decimal::from(50)));
        assert_eq!(snapshot.available(99), None);
    }
}
