//! 可生產數量計算（瓶頸物料上限）

use prodplan_core::{BomLine, Product, StockSnapshot};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 無用料明細產品的可生產數量上限
///
/// 沿用既有系統的固定上限：沒有任何用料明細的產品視為「大量可生產」，
/// 回傳此常數而非無上限。這是刻意保留的哨兵值，不是推導出的邊界。
pub const UNCONSTRAINED_CAP: u32 = 999;

/// 計算單一產品在目前快照下的最大可生產數量
///
/// 取所有用料明細貢獻值的最小值（瓶頸物料上限）：
/// - 無用料明細：回傳 [`UNCONSTRAINED_CAP`]
/// - 無效行（需求量 ≤ 0）：貢獻 0
/// - 原物料不在快照中或剩餘量 ≤ 0：貢獻 0
/// - 其餘：floor(剩餘量 / 需求量)，向下取整
pub fn max_producible(product: &Product, snapshot: &StockSnapshot) -> u32 {
    if product.materials.is_empty() {
        return UNCONSTRAINED_CAP;
    }

    product
        .materials
        .iter()
        .map(|line| line_capacity(line, snapshot))
        .min()
        .unwrap_or(0)
}

/// 單一用料明細的貢獻值
fn line_capacity(line: &BomLine, snapshot: &StockSnapshot) -> u32 {
    if line.quantity_required <= 0 {
        return 0;
    }

    let stock = match snapshot.available(line.material_id) {
        Some(stock) if stock > Decimal::ZERO => stock,
        _ => return 0,
    };

    (stock / Decimal::from(line.quantity_required))
        .floor()
        .to_u32()
        .unwrap_or(u32::MAX)
}
