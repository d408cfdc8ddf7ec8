//! 共用物料競爭示例
//!
//! 兩個產品共用同一原物料時，高價產品先分配，
//! 低價產品只能用扣料之後的剩餘量計算。

use prodplan::PlanningService;
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 共用物料競爭示例 ===\n");

    let mut service = PlanningService::new();

    let alloy = service.materials_mut().create("ALLOY-01", "鋁合金", Decimal::from(100))?;

    let (products, materials) = service.stores_mut();
    products.create("P-HIGH", "高價品", Decimal::from(200), &[(alloy.id, 5)], materials)?;
    products.create("P-LOW", "低價品", Decimal::from(100), &[(alloy.id, 10)], materials)?;

    println!("鋁合金庫存: 100");
    println!("高價品 (單價 200) 每件需 5；低價品 (單價 100) 每件需 10\n");

    let report = service.production_suggestion();

    for suggestion in &report.suggestions {
        println!(
            "{}: 可生產 {} 件，總價值 {}",
            suggestion.product.name, suggestion.producible_quantity, suggestion.total_value
        );
    }

    // 高價品 100/5 = 20 件用盡庫存，低價品分不到任何剩餘量
    Ok(())
}
