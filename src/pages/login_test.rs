use super::*;

#[test]
fn login_offers_all_four_roles() {
    let cards = role_cards();
    assert_eq!(cards.len(), 4);
    let roles: Vec<Role> = cards.iter().map(|(role, ..)| *role).collect();
    assert!(roles.contains(&Role::SuperAdmin));
    assert!(roles.contains(&Role::Dueno));
    assert!(roles.contains(&Role::Encargado));
    assert!(roles.contains(&Role::Escaner));
}

#[test]
fn role_card_labels_match_the_profiles() {
    let cards = role_cards();
    assert_eq!(cards[0].2, "Super Admin");
    assert_eq!(cards[1].2, "Dueño");
    assert_eq!(cards[2].2, "Encargado");
    assert_eq!(cards[3].2, "Escáner");
    assert_eq!(cards[2].3, "Punto de venta e inventario");
}
