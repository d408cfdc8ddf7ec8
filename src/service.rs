//! 生產規劃服務

use prodplan_calc::{SuggestionEngine, SuggestionReport};
use prodplan_store::{MaterialStore, ProductStore};

/// 生產規劃服務
///
/// 持有產品目錄與原物料兩個儲存，對外提供單一的唯讀建議查詢。
/// 每次查詢都重新讀取兩個儲存並從頭計算，結果永不回寫庫存。
#[derive(Debug, Default)]
pub struct PlanningService {
    materials: MaterialStore,
    products: ProductStore,
}

impl PlanningService {
    /// 創建新的規劃服務（空儲存）
    pub fn new() -> Self {
        Self {
            materials: MaterialStore::new(),
            products: ProductStore::new(),
        }
    }

    /// 原物料儲存
    pub fn materials(&self) -> &MaterialStore {
        &self.materials
    }

    /// 原物料儲存（可變）
    pub fn materials_mut(&mut self) -> &mut MaterialStore {
        &mut self.materials
    }

    /// 產品目錄儲存
    pub fn products(&self) -> &ProductStore {
        &self.products
    }

    /// 產品目錄儲存（可變）
    ///
    /// 明細引用驗證需要原物料儲存，請搭配 [`PlanningService::materials`] 使用，
    /// 或直接呼叫 [`PlanningService::stores_mut`] 同時取得兩者。
    pub fn products_mut(&mut self) -> &mut ProductStore {
        &mut self.products
    }

    /// 同時取得產品目錄（可變）與原物料儲存（唯讀）
    pub fn stores_mut(&mut self) -> (&mut ProductStore, &MaterialStore) {
        (&mut self.products, &self.materials)
    }

    /// 計算生產建議
    ///
    /// 讀取完整產品目錄與原物料存量，交給建議引擎計算。
    pub fn production_suggestion(&self) -> SuggestionReport {
        let products = self.products.list_all();
        let materials = self.materials.list_all();

        tracing::debug!(
            "讀取目錄快照：產品 {} 筆，原物料 {} 筆",
            products.len(),
            materials.len()
        );

        SuggestionEngine::suggest(products, &materials)
    }
}
