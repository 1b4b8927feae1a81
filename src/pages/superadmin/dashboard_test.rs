use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Infrastructure gauges
// ============================================================================

#[test]
fn server_level_buckets_at_the_documented_thresholds() {
    assert_eq!(server_level(0), ServerLevel::Normal);
    assert_eq!(server_level(74), ServerLevel::Normal);
    assert_eq!(server_level(75), ServerLevel::Warning);
    assert_eq!(server_level(89), ServerLevel::Warning);
    assert_eq!(server_level(90), ServerLevel::Critical);
    assert_eq!(server_level(100), ServerLevel::Critical);
}

#[test]
fn demo_gauges_sit_below_the_critical_band() {
    assert_eq!(server_level(45), ServerLevel::Normal);
    assert_eq!(server_level(62), ServerLevel::Normal);
    assert_eq!(server_level(78), ServerLevel::Warning);
}

// ============================================================================
// MRR series
// ============================================================================

#[test]
fn mrr_series_grows_month_over_month() {
    let points = mrr_series();
    assert_eq!(points.len(), 6);
    for pair in points.windows(2) {
        assert!(pair[0].mrr < pair[1].mrr);
    }
    assert_eq!(points[0].month, "Jun");
    assert_eq!(points[5].month, "Nov");
    assert!(approx(points[5].mrr, 42_000.0));
}

#[test]
fn latest_month_matches_the_mrr_headline() {
    let points = mrr_series();
    let latest = points.last().map(|p| p.mrr).unwrap_or_default();
    assert_eq!(format_money(latest), "$42,000.00");
}

#[test]
fn signup_peak_comes_from_november() {
    let points = mrr_series();
    assert!(approx(signup_peak(&points), 8.0));
}

#[test]
fn bar_height_scales_against_the_peak() {
    assert_eq!(bar_height(42_000.0, 42_000.0), "100%");
    assert_eq!(bar_height(21_000.0, 42_000.0), "50%");
    assert_eq!(bar_height(100.0, 0.0), "0%");
}

// ============================================================================
// Activity feed
// ============================================================================

#[test]
fn activity_feed_mixes_money_and_plain_events() {
    let feed = recent_activity();
    assert_eq!(feed.len(), 4);
    assert_eq!(feed.iter().filter(|e| e.amount.is_some()).count(), 3);
    assert!(
        feed.iter()
            .any(|e| e.action == "Nueva sucursal creada" && e.amount.is_none())
    );
}
