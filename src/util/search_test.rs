use super::*;

#[test]
fn matches_query_ignores_case() {
    assert!(matches_query("Sombrero Texana Premium", "texana"));
    assert!(matches_query("BOT-002", "bot"));
    assert!(!matches_query("Cinturón Piel de Res", "hebilla"));
}

#[test]
fn matches_query_handles_accented_text() {
    assert!(matches_query("María González", "gonzález"));
    assert!(matches_query("Cinturón", "CINTURÓN"));
}

#[test]
fn empty_query_matches_everything() {
    assert!(matches_query("anything", ""));
    assert!(matches_query("anything", "   "));
    assert!(matches_query("", ""));
}

#[test]
fn any_field_matches_scans_all_fields() {
    let fields = ["Moda Total", "Juan Pérez", "DELETE_BRANCH"];
    assert!(any_field_matches(&fields, "delete"));
    assert!(any_field_matches(&fields, "pérez"));
    assert!(!any_field_matches(&fields, "zapatería"));
}
