use super::*;

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_has_no_role() {
    let session = Session::default();
    assert_eq!(session.role, None);
}

#[test]
fn sign_in_sets_the_selected_role() {
    let mut session = Session::default();
    session.sign_in(Role::Encargado);
    assert_eq!(session.role, Some(Role::Encargado));
}

#[test]
fn sign_in_replaces_a_previous_role() {
    let mut session = Session::default();
    session.sign_in(Role::Dueno);
    session.sign_in(Role::Escaner);
    assert_eq!(session.role, Some(Role::Escaner));
}

#[test]
fn sign_out_clears_the_role() {
    let mut session = Session::default();
    session.sign_in(Role::SuperAdmin);
    session.sign_out();
    assert_eq!(session.role, None);
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_variants_are_distinct() {
    let variants = [Role::SuperAdmin, Role::Dueno, Role::Encargado, Role::Escaner];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}
