use super::*;

#[test]
fn three_report_types_with_distinct_titles() {
    assert_eq!(EvidenceType::ALL.len(), 3);
    assert_eq!(EvidenceType::Expense.title(), "Ticket de Gasto");
    assert_eq!(EvidenceType::Damaged.title(), "Mercancía Dañada");
    assert_eq!(EvidenceType::Delivery.title(), "Recepción de Paquete");
}

#[test]
fn descriptions_explain_each_type() {
    assert_eq!(EvidenceType::Expense.description(), "Comprobar salida de efectivo");
    assert_eq!(EvidenceType::Damaged.description(), "Justificar una merma");
    assert_eq!(EvidenceType::Delivery.description(), "Probar estado de llegada");
}

#[test]
fn note_placeholders_differ_per_type() {
    let placeholders: Vec<&str> = EvidenceType::ALL
        .into_iter()
        .map(EvidenceType::note_placeholder)
        .collect();
    for (i, a) in placeholders.iter().enumerate() {
        assert!(a.starts_with("Ej:"));
        for b in &placeholders[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn upload_requires_a_note() {
    assert!(can_upload("Se compró material de limpieza"));
    assert!(!can_upload(""));
    assert!(!can_upload("   "));
}
