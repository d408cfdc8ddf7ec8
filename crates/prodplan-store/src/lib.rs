//! # Prodplan Store
//!
//! 記憶體內的產品目錄與原物料儲存
//!
//! 建議引擎的兩個讀取協作者：產品目錄查詢與原物料庫存查詢。
//! 邊界錯誤（找不到、編號重複）在這一層回報，引擎本身不產生錯誤。

pub mod catalog;
pub mod materials;

// Re-export 主要類型
pub use catalog::ProductStore;
pub use materials::MaterialStore;
