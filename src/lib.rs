//! # Prodplan
//!
//! 庫存與生產規劃後端：原物料、產品（含用料明細）的維護，
//! 以及依單價貪婪分配的生產建議計算。

pub mod service;

// Re-export 主要類型
pub use prodplan_calc::{ProductionSuggestion, SuggestionEngine, SuggestionReport, UNCONSTRAINED_CAP};
pub use prodplan_core::{BomLine, PlanningError, Product, RawMaterial, Result, StockSnapshot};
pub use prodplan_store::{MaterialStore, ProductStore};
pub use service::PlanningService;
