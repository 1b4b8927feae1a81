//! Session state for the role gate.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Profiles selectable from the login screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// SaaS platform operator console.
    SuperAdmin,
    /// Chain owner: analytics and administration.
    Dueno,
    /// Branch manager: register, inventory, and cash drawer.
    Encargado,
    /// Handheld scanner companion app.
    Escaner,
}

/// The in-memory session: which role is signed in, if any.
///
/// There is no credential check and nothing survives a reload. Signing
/// out clears the role, which unmounts the whole role layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub role: Option<Role>,
}

impl Session {
    pub fn sign_in(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub fn sign_out(&mut self) {
        self.role = None;
    }
}
