//! Super-admin console screen selection.

#[cfg(test)]
#[path = "superadmin_test.rs"]
mod superadmin_test;

/// Screens reachable from the super-admin sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SuperAdminScreen {
    /// SaaS overview dashboard, the console's landing screen.
    #[default]
    Dashboard,
    Tenants,
    Plans,
    Billing,
    Seeds,
    Logs,
}
