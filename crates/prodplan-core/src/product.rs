//! 產品與用料明細模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 用料明細（BOM 行）
///
/// 以 ID 引用產品與原物料的值紀錄，不持有物件圖的反向指標。
/// `quantity_required <= 0` 視為無效行，計算時貢獻為 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    /// 明細ID
    pub id: u64,

    /// 所屬產品ID
    pub product_id: u64,

    /// 原物料ID
    pub material_id: u64,

    /// 每件產品所需數量
    pub quantity_required: i64,
}

impl BomLine {
    /// 創建新的用料明細
    pub fn new(id: u64, product_id: u64, material_id: u64, quantity_required: i64) -> Self {
        Self {
            id,
            product_id,
            material_id,
            quantity_required,
        }
    }

    /// 檢查是否為有效行（需求量為正）
    pub fn is_valid(&self) -> bool {
        self.quantity_required > 0
    }
}

/// 產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: u64,

    /// 品號（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 單價（排序鍵與價值乘數）
    pub price: Decimal,

    /// 用料明細（順序無關）
    pub materials: Vec<BomLine>,
}

impl Product {
    /// 創建新的產品（無用料明細）
    pub fn new(id: u64, code: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            price,
            materials: Vec::new(),
        }
    }

    /// 建構器模式：設置用料明細
    pub fn with_materials(mut self, materials: Vec<BomLine>) -> Self {
        self.materials = materials;
        self
    }

    /// 添加用料明細
    pub fn add_material(&mut self, line: BomLine) {
        self.materials.push(line);
    }

    /// 檢查是否有用料明細
    pub fn has_bom(&self) -> bool {
        !self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product() {
        let product = Product::new(1, "CHAIR-01", "餐椅", Decimal::from(250));

        assert_eq!(product.id, 1);
        assert_eq!(product.code, "CHAIR-01");
        assert_eq!(product.price, Decimal::from(250));
        assert!(!product.has_bom());
    }

    #[test]
    fn test_product_with_materials() {
        let product = Product::new(2, "TABLE-01", "餐桌", Decimal::from(800))
            .with_materials(vec![
                BomLine::new(1, 2, 10, 4),
                BomLine::new(2, 2, 11, 1),
            ]);

        assert!(product.has_bom());
        assert_eq!(product.materials.len(), 2);
        assert_eq!(product.materials[0].material_id, 10);
        assert_eq!(product.materials[0].quantity_required, 4);
    }

    #[test]
    fn test_product_serde_round_trip() {
        let product = Product::new(3, "DESK-01", "書桌", Decimal::from(600))
            .with_materials(vec![BomLine::new(5, 3, 7, 2)]);

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(back, product);
    }

    #[test]
    fn test_bom_line_validity() {
        assert!(BomLine::new(1, 1, 1, 3).is_valid());
        assert!(!BomLine::new(2, 1, 1, 0).is_valid());
        assert!(!BomLine::new(3, 1, 1, -5).is_valid());
    }
}
