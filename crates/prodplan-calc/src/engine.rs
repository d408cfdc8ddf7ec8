//! 生產建議主引擎

use prodplan_core::{Product, RawMaterial, StockSnapshot};
use rust_decimal::Decimal;

use crate::{capacity, depletion, ProductionSuggestion, SuggestionReport};

/// 生產建議引擎
///
/// 單次同步純計算：輸入產品目錄與原物料快照，輸出依單價由高至低的
/// 建議清單。引擎不保存任何狀態，每次呼叫都從頭重建快照，
/// 因此各次呼叫之間互不影響，可安全並行。
pub struct SuggestionEngine;

impl SuggestionEngine {
    /// 計算生產建議
    ///
    /// 依單價由高至低貪婪分配：先算出目前快照下的最大可生產數量，
    /// 再模擬扣料，讓共用物料優先配給高價值產品。
    /// 所有輸入產品都會出現在結果中（含可生產數量為 0 者）。
    pub fn suggest(mut products: Vec<Product>, materials: &[RawMaterial]) -> SuggestionReport {
        tracing::info!(
            "開始生產建議計算：產品 {} 筆，原物料 {} 筆",
            products.len(),
            materials.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 依單價由高至低排序（穩定排序，同價保持原順序）
        products.sort_by(|a, b| b.price.cmp(&a.price));

        // Step 2: 建立本次計算專用的庫存快照
        let mut snapshot = StockSnapshot::from_materials(materials);

        // Step 3: 逐產品計算可生產數量並模擬扣料
        let mut suggestions = Vec::with_capacity(products.len());

        for product in products {
            let producible = capacity::max_producible(&product, &snapshot);

            tracing::debug!(
                "產品 {} (單價 {}) 可生產數量: {}",
                product.code,
                product.price,
                producible
            );

            // 只有可生產時才扣料
            if producible > 0 {
                depletion::deplete(&product, producible, &mut snapshot);
            }

            let total_value = product.price * Decimal::from(producible);

            suggestions.push(ProductionSuggestion {
                product,
                producible_quantity: producible,
                total_value,
            });
        }

        let mut report = SuggestionReport::empty();
        report.suggestions = suggestions;
        report.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "生產建議計算完成，耗時 {:?}，可生產建議 {} / {} 筆",
            start_time.elapsed(),
            report.producible_count(),
            report.suggestions.len()
        );

        report
    }
}
