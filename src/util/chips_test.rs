use super::*;

#[test]
fn add_entry_appends_trimmed_values() {
    let mut list = vec!["Negro".to_owned()];
    assert!(add_entry(&mut list, "  Morado "));
    assert_eq!(list, vec!["Negro".to_owned(), "Morado".to_owned()]);
}

#[test]
fn add_entry_rejects_blank_input() {
    let mut list = vec!["Negro".to_owned()];
    assert!(!add_entry(&mut list, ""));
    assert!(!add_entry(&mut list, "   "));
    assert_eq!(list.len(), 1);
}

#[test]
fn add_entry_rejects_duplicates_ignoring_case() {
    let mut list = vec!["Negro".to_owned()];
    assert!(!add_entry(&mut list, "negro"));
    assert!(!add_entry(&mut list, "NEGRO "));
    assert_eq!(list.len(), 1);
}

#[test]
fn remove_entry_drops_by_index() {
    let mut list = vec!["Cuadra".to_owned(), "Laredo".to_owned()];
    assert!(remove_entry(&mut list, 0));
    assert_eq!(list, vec!["Laredo".to_owned()]);
}

#[test]
fn remove_entry_ignores_out_of_range_index() {
    let mut list = vec!["Cuadra".to_owned()];
    assert!(!remove_entry(&mut list, 5));
    assert_eq!(list.len(), 1);
}
