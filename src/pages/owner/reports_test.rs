use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// =============================================================
// Ranking
// =============================================================

#[test]
fn podium_gets_medals_rest_get_numbers() {
    assert_eq!(rank_marker(1), "🥇");
    assert_eq!(rank_marker(2), "🥈");
    assert_eq!(rank_marker(3), "🥉");
    assert_eq!(rank_marker(4), "4");
}

#[test]
fn best_sellers_are_ordered_by_revenue() {
    let top = best_sellers();
    for pair in top.windows(2) {
        assert!(pair[0].revenue >= pair[1].revenue);
    }
}

#[test]
fn profit_never_exceeds_revenue() {
    for item in best_sellers() {
        assert!(item.profit < item.revenue, "{}", item.product);
    }
}

// =============================================================
// Dead stock
// =============================================================

#[test]
fn dead_stock_ties_up_34_200_pesos() {
    assert!(approx(dead_stock_value(&dead_stock()), 34_200.0));
}

#[test]
fn dead_stock_is_sorted_most_stagnant_first() {
    let items = dead_stock();
    for pair in items.windows(2) {
        assert!(pair[0].days_stagnant >= pair[1].days_stagnant);
    }
}

// =============================================================
// Sales mix
// =============================================================

#[test]
fn category_percentages_cover_the_whole_pie() {
    let total: u32 = category_mix().iter().map(|s| s.percent).sum();
    assert_eq!(total, 100);
}

#[test]
fn category_revenue_totals_1_147_000() {
    assert!(approx(category_revenue(&category_mix()), 1_147_000.0));
}

#[test]
fn payment_percentages_cover_the_whole_pie() {
    let mix = payment_mix();
    let total: u32 = mix.iter().map(|s| s.percent).sum();
    assert_eq!(total, 100);
    assert_eq!(mix[0].method, "Efectivo");
}

// =============================================================
// Range selector
// =============================================================

#[test]
fn report_range_values_round_trip() {
    for range in ReportRange::ALL {
        assert_eq!(ReportRange::from_value(range.value()), range);
    }
    assert_eq!(ReportRange::from_value("decade"), ReportRange::Month);
}
