//! # Prodplan Core
//!
//! 核心資料模型與類型定義

pub mod material;
pub mod product;
pub mod snapshot;

// Re-export 主要類型
pub use material::RawMaterial;
pub use product::{BomLine, Product};
pub use snapshot::StockSnapshot;

/// 生產規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("找不到產品: {0}")]
    ProductNotFound(u64),

    #[error("找不到原物料: {0}")]
    MaterialNotFound(u64),

    #[error("找不到用料明細: {0}")]
    BomLineNotFound(u64),

    #[error("編號重複: {0}")]
    DuplicateCode(String),

    #[error("驗證錯誤: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, PlanningError>;
