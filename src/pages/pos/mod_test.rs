use super::*;

#[test]
fn sidebar_lists_the_four_register_screens() {
    let items = sidebar_items();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].0, PosScreen::Sales);
    assert_eq!(items[0].1, "Punto de Venta");
    assert_eq!(items[1].1, "Inventario");
    assert_eq!(items[2].1, "Movimientos de Caja");
    assert_eq!(items[3].1, "Consultas");
}

#[test]
fn sidebar_never_offers_the_shift_start_screen() {
    assert!(
        sidebar_items()
            .iter()
            .all(|(screen, ..)| *screen != PosScreen::ShiftStart)
    );
}

#[test]
fn shift_gated_items_match_the_state_rules() {
    for (screen, ..) in sidebar_items() {
        let gated = matches!(screen, PosScreen::Sales | PosScreen::Cash);
        assert_eq!(screen.needs_shift(), gated);
    }
}
