use retail_pricing::pricing::{AreaProfileTable, PricingResult, Product};

/// Prints one priced product with its rule trail.
pub(crate) fn render_result(product: &Product, result: &PricingResult, areas: &AreaProfileTable) {
    let area = product
        .area_code
        .as_deref()
        .map(|code| areas.profile_or_unknown(code));

    println!(
        "\n{} [{}] ({})",
        product.name, product.id, product.category
    );
    match area {
        Some(area) => println!(
            "  Area {} - {} (financial score {}, avg demand {})",
            area.code, area.name, area.financial_score, area.avg_demand
        ),
        None => println!("  Area: not specified"),
    }
    println!(
        "  Stock {} | demand {} | expires {}",
        product.stock, product.demand_count, product.expiry_date
    );
    println!(
        "  Price {} -> {} (adjustment {:+}){}",
        format_currency(result.original_price),
        format_currency(result.final_price),
        result.total_adjustment,
        if result.clamped { " [floor applied]" } else { "" }
    );
    for outcome in &result.evaluations {
        let marker = if outcome.applied { "+" } else { "-" };
        println!(
            "    {marker} {}: {}",
            outcome.rule.description(),
            outcome.message
        );
    }
}

pub(crate) fn format_currency(amount: rust_decimal::Decimal) -> String {
    if amount.is_sign_negative() {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}
