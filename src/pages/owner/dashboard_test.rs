use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Filters
// =============================================================

#[test]
fn date_range_values_round_trip() {
    for range in DateRange::ALL {
        assert_eq!(DateRange::from_value(range.value()), range);
    }
}

#[test]
fn unknown_date_range_falls_back_to_today() {
    assert_eq!(DateRange::from_value("fortnight"), DateRange::Today);
}

#[test]
fn branch_filter_values_round_trip() {
    for branch in BranchFilter::ALL {
        assert_eq!(BranchFilter::from_value(branch.value()), branch);
    }
    assert_eq!(BranchFilter::from_value(""), BranchFilter::All);
}

// =============================================================
// KPIs
// =============================================================

#[test]
fn kpi_money_values_render_with_cents() {
    let kpis = demo_kpis();
    assert_eq!(kpis[0].value, "$48,250.00");
    assert_eq!(kpis[2].value, "$1,245.50");
    assert_eq!(kpis[3].value, "387");
}

#[test]
fn only_the_average_ticket_trends_down() {
    let downs: Vec<_> = demo_kpis().iter().filter(|k| !k.up).map(|k| k.label).collect();
    assert_eq!(downs, vec!["Ticket Promedio"]);
}

// =============================================================
// Trend chart
// =============================================================

#[test]
fn trend_peak_is_the_last_hour_of_today() {
    let points = hourly_trend();
    assert!(approx(trend_peak(&points), 22_400.0));
}

#[test]
fn today_outsells_yesterday_at_every_hour() {
    for point in hourly_trend() {
        assert!(point.today > point.yesterday, "hour {}", point.hour);
    }
}

#[test]
fn bar_height_scales_against_the_peak() {
    assert_eq!(bar_height(22_400.0, 22_400.0), "100%");
    assert_eq!(bar_height(11_200.0, 22_400.0), "50%");
    assert_eq!(bar_height(500.0, 0.0), "0%");
}

// =============================================================
// Alerts
// =============================================================

#[test]
fn alert_feed_covers_every_severity() {
    let kinds: Vec<_> = demo_alerts().iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![AlertKind::Critical, AlertKind::Warning, AlertKind::Info]
    );
}

#[test]
fn alert_kind_labels_are_spanish() {
    assert_eq!(AlertKind::Critical.label(), "Crítico");
    assert_eq!(AlertKind::Warning.label(), "Advertencia");
    assert_eq!(AlertKind::Info.label(), "Info");
}
