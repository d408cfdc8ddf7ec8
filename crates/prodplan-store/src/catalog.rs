//! 產品目錄儲存

use std::collections::HashMap;

use prodplan_core::{BomLine, PlanningError, Product, Result};
use rust_decimal::Decimal;

use crate::materials::MaterialStore;

/// 新增或替換用料明細時的輸入：(原物料ID, 每件需求量)
pub type LineSpec = (u64, i64);

/// 產品目錄儲存（記憶體內）
///
/// 產品與用料明細的 ID 均由儲存層遞增配發。
/// 建立或更新時會對照原物料儲存驗證每一條明細的原物料引用。
#[derive(Debug)]
pub struct ProductStore {
    products: HashMap<u64, Product>,
    next_id: u64,
    next_line_id: u64,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    /// 創建空的產品目錄
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            next_id: 1,
            next_line_id: 1,
        }
    }

    /// 新增產品，配發 ID 後回傳
    ///
    /// 明細引用了不存在的原物料時回傳 [`PlanningError::MaterialNotFound`]。
    pub fn create(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        lines: &[LineSpec],
        materials: &MaterialStore,
    ) -> Result<Product> {
        let code = code.into();
        self.ensure_unique_code(&code, None)?;
        Self::ensure_materials_exist(lines, materials)?;

        let id = self.next_id;
        self.next_id += 1;

        let bom = self.build_lines(id, lines);
        let product = Product::new(id, code, name, price).with_materials(bom);
        self.products.insert(id, product.clone());

        tracing::debug!("新增產品 {} ({})，用料明細 {} 條", product.code, product.id, lines.len());
        Ok(product)
    }

    /// 依 ID 查詢產品
    pub fn get(&self, id: u64) -> Result<&Product> {
        self.products
            .get(&id)
            .ok_or(PlanningError::ProductNotFound(id))
    }

    /// 查詢全部產品（依 ID 排序，確保結果可重現）
    pub fn list_all(&self) -> Vec<Product> {
        let mut all: Vec<Product> = self.products.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        all
    }

    /// 更新產品（整組替換用料明細）
    pub fn update(
        &mut self,
        id: u64,
        code: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        lines: &[LineSpec],
        materials: &MaterialStore,
    ) -> Result<Product> {
        // 先確認產品存在，避免其他驗證錯誤蓋過 not-found
        if !self.products.contains_key(&id) {
            return Err(PlanningError::ProductNotFound(id));
        }

        let code = code.into();
        self.ensure_unique_code(&code, Some(id))?;
        Self::ensure_materials_exist(lines, materials)?;

        let bom = self.build_lines(id, lines);
        let product = self.products.get_mut(&id).ok_or(PlanningError::ProductNotFound(id))?;

        product.code = code;
        product.name = name.into();
        product.price = price;
        product.materials = bom;

        Ok(product.clone())
    }

    /// 刪除產品
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.products
            .remove(&id)
            .map(|p| tracing::debug!("刪除產品 {} ({})", p.code, p.id))
            .ok_or(PlanningError::ProductNotFound(id))
    }

    /// 為既有產品添加一條用料明細
    pub fn add_line(
        &mut self,
        product_id: u64,
        material_id: u64,
        quantity_required: i64,
        materials: &MaterialStore,
    ) -> Result<BomLine> {
        if !materials.exists(material_id) {
            return Err(PlanningError::MaterialNotFound(material_id));
        }

        let line_id = self.next_line_id;
        let product = self
            .products
            .get_mut(&product_id)
            .ok_or(PlanningError::ProductNotFound(product_id))?;

        self.next_line_id += 1;
        let line = BomLine::new(line_id, product_id, material_id, quantity_required);
        product.add_material(line);

        Ok(line)
    }

    /// 更新一條用料明細
    pub fn update_line(
        &mut self,
        line_id: u64,
        material_id: u64,
        quantity_required: i64,
        materials: &MaterialStore,
    ) -> Result<BomLine> {
        if !materials.exists(material_id) {
            return Err(PlanningError::MaterialNotFound(material_id));
        }

        let line = self
            .products
            .values_mut()
            .flat_map(|p| p.materials.iter_mut())
            .find(|l| l.id == line_id)
            .ok_or(PlanningError::BomLineNotFound(line_id))?;

        line.material_id = material_id;
        line.quantity_required = quantity_required;

        Ok(*line)
    }

    /// 移除一條用料明細
    pub fn remove_line(&mut self, line_id: u64) -> Result<()> {
        for product in self.products.values_mut() {
            if let Some(pos) = product.materials.iter().position(|l| l.id == line_id) {
                product.materials.remove(pos);
                return Ok(());
            }
        }
        Err(PlanningError::BomLineNotFound(line_id))
    }

    /// 查詢產品的全部用料明細
    pub fn lines_for_product(&self, product_id: u64) -> Result<Vec<BomLine>> {
        self.get(product_id).map(|p| p.materials.clone())
    }

    /// 依 ID 查詢單一用料明細
    pub fn get_line(&self, line_id: u64) -> Result<BomLine> {
        self.products
            .values()
            .flat_map(|p| p.materials.iter())
            .find(|l| l.id == line_id)
            .copied()
            .ok_or(PlanningError::BomLineNotFound(line_id))
    }

    /// 查詢所有產品的全部用料明細（依明細 ID 排序，確保結果可重現）
    pub fn list_all_lines(&self) -> Vec<BomLine> {
        let mut all: Vec<BomLine> = self
            .products
            .values()
            .flat_map(|p| p.materials.iter())
            .copied()
            .collect();
        all.sort_by_key(|l| l.id);
        all
    }

    /// 產品筆數
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// 檢查目錄是否為空
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn build_lines(&mut self, product_id: u64, lines: &[LineSpec]) -> Vec<BomLine> {
        lines
            .iter()
            .map(|&(material_id, quantity_required)| {
                let line_id = self.next_line_id;
                self.next_line_id += 1;
                BomLine::new(line_id, product_id, material_id, quantity_required)
            })
            .collect()
    }

    fn ensure_materials_exist(lines: &[LineSpec], materials: &MaterialStore) -> Result<()> {
        for &(material_id, _) in lines {
            if !materials.exists(material_id) {
                return Err(PlanningError::MaterialNotFound(material_id));
            }
        }
        Ok(())
    }

    fn ensure_unique_code(&self, code: &str, exclude_id: Option<u64>) -> Result<()> {
        if code.trim().is_empty() {
            return Err(PlanningError::Validation("品號不可為空".to_string()));
        }
        if self
            .products
            .values()
            .any(|p| p.code == code && Some(p.id) != exclude_id)
        {
            return Err(PlanningError::DuplicateCode(code.to_string()));
        }
        Ok(())
    }
}
