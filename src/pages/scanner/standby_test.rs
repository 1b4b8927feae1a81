use super::*;

#[test]
fn standby_offers_the_four_satellite_tools() {
    let tools = standby_tools();
    let modes: Vec<ScannerMode> = tools.iter().map(|(mode, ..)| *mode).collect();
    assert_eq!(
        modes,
        [
            ScannerMode::Inventory,
            ScannerMode::Price,
            ScannerMode::Evidence,
            ScannerMode::Location,
        ]
    );
    // None of them routes back into the link/standby pair.
    assert!(!modes.contains(&ScannerMode::Link));
    assert!(!modes.contains(&ScannerMode::Standby));
}

#[test]
fn standby_tool_titles_are_distinct() {
    let tools = standby_tools();
    for (i, a) in tools.iter().enumerate() {
        for b in &tools[i + 1..] {
            assert_ne!(a.2, b.2);
        }
    }
}
