//! Owner console screen selection.

#[cfg(test)]
#[path = "owner_test.rs"]
mod owner_test;

/// Screens reachable from the owner sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OwnerScreen {
    /// Executive dashboard, the console's landing screen.
    #[default]
    Dashboard,
    Branches,
    Audit,
    Inventory,
    Personnel,
    Reports,
    Config,
}
