//! 原物料儲存

use std::collections::HashMap;

use prodplan_core::{PlanningError, RawMaterial, Result};
use rust_decimal::Decimal;

/// 原物料儲存（記憶體內）
///
/// ID 由儲存層遞增配發，料號唯一。
#[derive(Debug)]
pub struct MaterialStore {
    items: HashMap<u64, RawMaterial>,
    next_id: u64,
}

impl Default for MaterialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialStore {
    /// 創建空的原物料儲存
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
        }
    }

    /// 新增原物料，配發 ID 後回傳
    pub fn create(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        stock_quantity: Decimal,
    ) -> Result<RawMaterial> {
        let code = code.into();
        self.ensure_unique_code(&code, None)?;

        let id = self.next_id;
        self.next_id += 1;

        let material = RawMaterial::new(id, code, name, stock_quantity);
        self.items.insert(id, material.clone());

        tracing::debug!("新增原物料 {} ({})", material.code, material.id);
        Ok(material)
    }

    /// 依 ID 查詢原物料
    pub fn get(&self, id: u64) -> Result<&RawMaterial> {
        self.items
            .get(&id)
            .ok_or(PlanningError::MaterialNotFound(id))
    }

    /// 查詢全部原物料（依 ID 排序，確保結果可重現）
    pub fn list_all(&self) -> Vec<RawMaterial> {
        let mut all: Vec<RawMaterial> = self.items.values().cloned().collect();
        all.sort_by_key(|m| m.id);
        all
    }

    /// 更新原物料
    pub fn update(
        &mut self,
        id: u64,
        code: impl Into<String>,
        name: impl Into<String>,
        stock_quantity: Decimal,
    ) -> Result<RawMaterial> {
        // 先確認原物料存在，避免其他驗證錯誤蓋過 not-found
        if !self.items.contains_key(&id) {
            return Err(PlanningError::MaterialNotFound(id));
        }

        let code = code.into();
        self.ensure_unique_code(&code, Some(id))?;

        let material = self
            .items
            .get_mut(&id)
            .ok_or(PlanningError::MaterialNotFound(id))?;

        material.code = code;
        material.name = name.into();
        material.stock_quantity = stock_quantity;

        Ok(material.clone())
    }

    /// 刪除原物料
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.items
            .remove(&id)
            .map(|m| tracing::debug!("刪除原物料 {} ({})", m.code, m.id))
            .ok_or(PlanningError::MaterialNotFound(id))
    }

    /// 檢查原物料是否存在
    pub fn exists(&self, id: u64) -> bool {
        self.items.contains_key(&id)
    }

    /// 原物料筆數
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 檢查儲存是否為空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn ensure_unique_code(&self, code: &str, exclude_id: Option<u64>) -> Result<()> {
        if code.trim().is_empty() {
            return Err(PlanningError::Validation("料號不可為空".to_string()));
        }
        if self
            .items
            .values()
            .any(|m| m.code == code && Some(m.id) != exclude_id)
        {
            return Err(PlanningError::DuplicateCode(code.to_string()));
        }
        Ok(())
    }
}
