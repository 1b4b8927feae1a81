use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn plan_by_name<'a>(plans: &'a [Plan], name: &str) -> &'a Plan {
    plans
        .iter()
        .find(|plan| plan.name == name)
        .unwrap_or_else(|| panic!("plan {name} missing"))
}

// ============================================================================
// Feature catalog
// ============================================================================

#[test]
fn feature_index_matches_position_in_all() {
    for (position, feature) in PlanFeature::ALL.into_iter().enumerate() {
        assert_eq!(feature.index(), position);
    }
}

#[test]
fn feature_names_and_descriptions_are_distinct() {
    for (i, feature) in PlanFeature::ALL.into_iter().enumerate() {
        for other in &PlanFeature::ALL[i + 1..] {
            assert_ne!(feature.name(), other.name());
            assert_ne!(feature.description(), other.description());
        }
    }
}

// ============================================================================
// Seed plans
// ============================================================================

#[test]
fn demo_plans_ladder_from_799_to_4999() {
    let plans = demo_plans();
    assert_eq!(plans.len(), 3);

    let starter = plan_by_name(&plans, "Emprendedor");
    assert!(approx(starter.price, 799.0));
    assert_eq!(starter.max_branches, 1);
    assert_eq!(starter.max_users, 1);

    let mid = plan_by_name(&plans, "Empresario");
    assert!(approx(mid.price, 1_999.0));
    assert_eq!(mid.max_branches, 5);
    assert_eq!(mid.max_users, 10);

    let top = plan_by_name(&plans, "Enterprise");
    assert!(approx(top.price, 4_999.0));
    assert_eq!(top.max_branches, UNLIMITED);
    assert_eq!(top.max_users, UNLIMITED);
}

#[test]
fn feature_policy_grows_with_the_tier() {
    let plans = demo_plans();
    let starter = plan_by_name(&plans, "Emprendedor");
    let mid = plan_by_name(&plans, "Empresario");
    let top = plan_by_name(&plans, "Enterprise");

    for feature in PlanFeature::ALL {
        assert!(!starter.has(feature), "{} should start excluded", feature.name());
        assert!(top.has(feature), "{} should be in Enterprise", feature.name());
    }

    assert!(mid.has(PlanFeature::Billing));
    assert!(mid.has(PlanFeature::OwnerApp));
    assert!(mid.has(PlanFeature::MultiCurrency));
    assert!(mid.has(PlanFeature::Analytics));
    assert!(!mid.has(PlanFeature::Api));
    assert!(!mid.has(PlanFeature::WhiteLabel));
}

#[test]
fn toggle_flips_a_single_switch() {
    let mut plans = demo_plans();
    let starter = &mut plans[0];

    starter.toggle(PlanFeature::Api);
    assert!(starter.has(PlanFeature::Api));
    assert!(!starter.has(PlanFeature::Billing));

    starter.toggle(PlanFeature::Api);
    assert!(!starter.has(PlanFeature::Api));
}

// ============================================================================
// Labels and guards
// ============================================================================

#[test]
fn limit_label_spells_out_the_sentinel() {
    assert_eq!(limit_label(UNLIMITED), "Ilimitado");
    assert_eq!(limit_label(5), "5");
    assert_eq!(limit_label(1), "1");
}

#[test]
fn creating_a_plan_needs_a_name_and_a_price() {
    assert!(can_create_plan("Pro Plus", "2999"));
    assert!(!can_create_plan("", "2999"));
    assert!(!can_create_plan("Pro Plus", ""));
    assert!(!can_create_plan("Pro Plus", "caro"));
}
