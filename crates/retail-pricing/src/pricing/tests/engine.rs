use super::common::*;
use crate::pricing::area::AreaProfile;
use crate::pricing::config::{PricingRule, RuleConfiguration};
use crate::pricing::engine::{evaluate, round_currency, PricingEngine, MINIMUM_PRICE};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn applied_rules(result: &crate::pricing::PricingResult) -> Vec<PricingRule> {
    result.adjustments.iter().map(|outcome| outcome.rule).collect()
}

#[test]
fn scenario_a_discounts_expiring_stock_in_affluent_area() {
    let result = evaluate(&scenario_a(), &rules(), &areas(), now());

    assert_eq!(
        applied_rules(&result),
        vec![PricingRule::ExpiryDiscount, PricingRule::LocationAdjustment]
    );
    assert_eq!(result.adjustments[0].adjustment, dec!(-0.798));
    assert_eq!(result.adjustments[1].adjustment, dec!(0.5985));
    assert_eq!(result.total_adjustment, dec!(-0.20));
    assert_eq!(result.final_price, dec!(3.79));
    assert!(!result.clamped);
    assert_eq!(
        result.area_info.as_ref().map(|area| area.financial_score),
        Some(4)
    );
}

#[test]
fn scenario_b_stacks_demand_and_low_stock_surcharges() {
    let result = evaluate(&scenario_b(), &rules(), &areas(), now());

    assert_eq!(
        applied_rules(&result),
        vec![PricingRule::DemandSurcharge, PricingRule::LowStockSurcharge]
    );
    assert_eq!(result.total_adjustment, dec!(1.35));
    assert_eq!(result.final_price, dec!(5.84));

    let location = result
        .outcome_for(PricingRule::LocationAdjustment)
        .expect("location outcome recorded");
    assert!(!location.applied);
    assert_eq!(location.message, "Middle-income area (score: 3) - no adjustment");
}

#[test]
fn scenario_c_prefers_expiry_discount_over_low_stock_surcharge() {
    let result = evaluate(&scenario_c(), &rules(), &areas(), now());

    assert!(result.is_applied(PricingRule::ExpiryDiscount));
    assert!(!result.is_applied(PricingRule::LowStockSurcharge));
    let low_stock = result
        .outcome_for(PricingRule::LowStockSurcharge)
        .expect("low stock outcome recorded");
    assert!(low_stock.message.contains("expiring soon"));
    assert_eq!(result.final_price, dec!(3.19));
}

#[test]
fn scenario_d_clamps_stacked_discounts_to_minimum_price() {
    let penny = product("penny", price(1), 50, 1, 0, Some("LOW"));
    let result = evaluate(&penny, &rules(), &areas(), now());
    assert_eq!(
        applied_rules(&result),
        vec![PricingRule::ExpiryDiscount, PricingRule::LocationAdjustment]
    );
    assert_eq!(result.final_price, MINIMUM_PRICE);
    assert!(result.clamped);

    let mut config = rules();
    config.expiry_discount.discount_percentage = dec!(100);
    let nickel = product("nickel", price(5), 50, 1, 0, Some("LOW"));
    let result = evaluate(&nickel, &config, &areas(), now());
    assert_eq!(result.final_price, dec!(0.01));
    assert_eq!(result.total_adjustment, dec!(-0.05));
    assert!(result.clamped);
    assert_ne!(
        result.final_price,
        round_currency(result.original_price + result.total_adjustment)
    );
}

#[test]
fn nickel_with_expiry_and_poorest_area_discounts_stays_positive() {
    let mut table = areas();
    table.insert(AreaProfile::new("ZERO", "Outer Borough", 0, 30.0));
    let nickel = product("nickel", price(5), 50, 1, 0, Some("ZERO"));

    let result = evaluate(&nickel, &rules(), &table, now());

    assert_eq!(
        applied_rules(&result),
        vec![PricingRule::ExpiryDiscount, PricingRule::LocationAdjustment]
    );
    assert_eq!(result.adjustments[0].adjustment, dec!(-0.01));
    assert_eq!(result.adjustments[1].adjustment, dec!(-0.0075));
    // 0.05 - 0.0175 = 0.0325, still above the floor
    assert_eq!(result.total_adjustment, dec!(-0.02));
    assert_eq!(result.final_price, dec!(0.03));
    assert!(!result.clamped);
    assert!(result.final_price >= MINIMUM_PRICE);
}

#[test]
fn disabling_every_rule_returns_original_price() {
    let config = RuleConfiguration::all_disabled();
    for item in [scenario_a(), scenario_b(), scenario_c()] {
        let result = evaluate(&item, &config, &areas(), now());
        assert_eq!(result.final_price, item.original_price);
        assert_eq!(result.total_adjustment, Decimal::ZERO);
        assert!(result.adjustments.is_empty());
        assert_eq!(result.evaluations.len(), 4);
    }
}

#[test]
fn evaluations_follow_fixed_rule_order() {
    let busy = product("busy", price(1000), 50, 2, 500, Some("TOP"));
    let result = evaluate(&busy, &rules(), &areas(), now());

    let order: Vec<PricingRule> = result.evaluations.iter().map(|outcome| outcome.rule).collect();
    assert_eq!(order, PricingRule::ALL.to_vec());
    assert_eq!(
        applied_rules(&result),
        vec![
            PricingRule::ExpiryDiscount,
            PricingRule::DemandSurcharge,
            PricingRule::LocationAdjustment,
        ]
    );
    // -20% + 15% + 20% of 10.00
    assert_eq!(result.total_adjustment, dec!(1.50));
    assert_eq!(result.final_price, dec!(11.50));
}

#[test]
fn unknown_area_yields_no_area_info() {
    let stray = product("stray", price(1000), 50, 30, 10, Some("NOWHERE"));
    let result = evaluate(&stray, &rules(), &areas(), now());
    assert!(result.area_info.is_none());
    assert!(result.adjustments.is_empty());
    assert_eq!(result.final_price, dec!(10.00));
}

#[test]
fn expiry_and_low_stock_never_both_apply_under_defaults() {
    for expires_in in -3..=20 {
        for stock in 0..=15 {
            let item = product("sweep", price(250), stock, expires_in, 0, None);
            let result = evaluate(&item, &rules(), &areas(), now());
            assert!(
                !(result.is_applied(PricingRule::ExpiryDiscount)
                    && result.is_applied(PricingRule::LowStockSurcharge)),
                "expiry {expires_in} stock {stock}"
            );
        }
    }
}

#[test]
fn round_currency_moves_half_cents_toward_positive_infinity() {
    assert_eq!(round_currency(dec!(0.125)), dec!(0.13));
    assert_eq!(round_currency(dec!(2.675)), dec!(2.68));
    assert_eq!(round_currency(dec!(-0.125)), dec!(-0.12));
    assert_eq!(round_currency(dec!(-0.1995)), dec!(-0.20));
    assert_eq!(round_currency(dec!(3.7905)), dec!(3.79));

    let zero = round_currency(dec!(-0.004));
    assert!(zero.is_zero());
    assert!(zero.is_sign_positive());
}

#[test]
fn engine_batch_preserves_input_order() {
    let engine = PricingEngine::new(rules(), areas());
    let products = vec![scenario_c(), scenario_a(), scenario_b()];

    let results = engine.evaluate_batch(&products, now());

    let ids: Vec<&str> = results.iter().map(|result| result.product_id.0.as_str()).collect();
    assert_eq!(ids, vec!["bread", "bananas", "milk"]);
    assert_eq!(results[1], engine.evaluate(&scenario_a(), now()));
}

#[test]
fn engine_does_not_mutate_configuration() {
    let engine = PricingEngine::new(rules(), areas());
    let _ = engine.evaluate(&scenario_b(), now());
    assert_eq!(engine.config(), &RuleConfiguration::default());
    assert_eq!(engine.areas(), &areas());
}
