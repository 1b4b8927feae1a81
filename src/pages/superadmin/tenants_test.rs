use super::*;

// ============================================================================
// Seed accounts
// ============================================================================

#[test]
fn demo_roster_has_four_known_tenants() {
    let tenants = demo_tenants();
    assert_eq!(tenants.len(), 4);

    let ids: Vec<&str> = tenants.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["T001", "T002", "T003", "T004"]);

    let elegante = &tenants[0];
    assert_eq!(elegante.business_name, "Boutique La Elegante");
    assert_eq!(elegante.owner_name, "María González");
    assert_eq!(elegante.plan, PlanTier::Pro);
    assert_eq!(elegante.status, TenantStatus::Active);
    assert_eq!(elegante.branches, 3);
}

#[test]
fn demo_roster_covers_every_lifecycle_state() {
    let tenants = demo_tenants();
    for status in [
        TenantStatus::Active,
        TenantStatus::Suspended,
        TenantStatus::Trial,
    ] {
        assert!(tenants.iter().any(|t| t.status == status));
    }
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn search_matches_business_owner_and_id() {
    let tenants = demo_tenants();
    let hits = |query: &str| {
        tenants
            .iter()
            .filter(|t| tenant_matches(t, query))
            .count()
    };

    assert_eq!(hits("boutique"), 1);
    assert_eq!(hits("carlos"), 1);
    assert_eq!(hits("t003"), 1);
    assert_eq!(hits(""), 4);
    assert_eq!(hits("inexistente"), 0);
}

// ============================================================================
// Onboarding
// ============================================================================

#[test]
fn next_id_continues_the_sequence() {
    assert_eq!(next_tenant_id(4), "T005");
    assert_eq!(next_tenant_id(0), "T001");
    assert_eq!(next_tenant_id(99), "T100");
}

#[test]
fn creation_requires_business_and_owner() {
    assert!(can_create_tenant("Moda Norte", "Julia Reyes"));
    assert!(!can_create_tenant("", "Julia Reyes"));
    assert!(!can_create_tenant("Moda Norte", "   "));
    assert!(!can_create_tenant("", ""));
}

// ============================================================================
// Plan tiers
// ============================================================================

#[test]
fn plan_tier_round_trips_through_the_select_value() {
    for tier in PlanTier::ALL {
        assert_eq!(PlanTier::from_value(tier.value()), tier);
    }
    assert_eq!(PlanTier::from_value("desconocido"), PlanTier::Basic);
}

#[test]
fn plan_option_labels_spell_out_the_limits() {
    assert_eq!(
        PlanTier::Basic.option_label(),
        "Básico - 1 sucursal, 1 usuario"
    );
    assert_eq!(
        PlanTier::Pro.option_label(),
        "Pro - 5 sucursales, 10 usuarios"
    );
    assert_eq!(PlanTier::Enterprise.option_label(), "Enterprise - Ilimitado");
}

#[test]
fn status_labels_carry_the_traffic_light() {
    assert_eq!(TenantStatus::Active.label(), "🟢 Activo");
    assert_eq!(TenantStatus::Suspended.label(), "🔴 Suspendido");
    assert_eq!(TenantStatus::Trial.label(), "🟡 Prueba");
}
