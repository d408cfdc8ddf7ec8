//! 家具工廠生產建議示例

use prodplan::PlanningService;
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== 家具工廠生產建議示例 ===\n");

    let mut service = PlanningService::new();

    // 建立原物料
    let steel = service.materials_mut().create("STEEL-01", "鋼板", Decimal::from(100))?;
    let wood = service.materials_mut().create("WOOD-01", "木板", Decimal::from(60))?;
    let screw = service.materials_mut().create("SCREW-01", "螺絲", Decimal::from(500))?;

    println!("原物料庫存:");
    for material in service.materials().list_all() {
        println!("  - {} ({}): {}", material.name, material.code, material.stock_quantity);
    }

    // 建立產品與用料明細
    let (products, materials) = service.stores_mut();
    products.create(
        "TABLE-01",
        "餐桌",
        Decimal::from(200),
        &[(steel.id, 10), (wood.id, 5), (screw.id, 20)],
        materials,
    )?;
    products.create(
        "CHAIR-01",
        "餐椅",
        Decimal::from(80),
        &[(steel.id, 5), (screw.id, 8)],
        materials,
    )?;
    products.create("SVC-01", "到府組裝", Decimal::from(30), &[], materials)?;

    // 計算生產建議
    let report = service.production_suggestion();

    println!("\n生產建議（依單價由高至低）:");
    for suggestion in &report.suggestions {
        println!(
            "  - {} ({}): 可生產 {} 件，總價值 {}",
            suggestion.product.name,
            suggestion.product.code,
            suggestion.producible_quantity,
            suggestion.total_value
        );
    }

    println!("\n計劃總價值: {}", report.total_plan_value());

    println!("\nJSON 輸出:");
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
