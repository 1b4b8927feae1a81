//! Scanner app state: mode switching and the register link.
//!
//! DESIGN
//! ======
//! The handheld app is a flat set of modes behind one current-mode value.
//! Linking to a register is a single flag; the satellite tools stay usable
//! unlinked (they can be reached from the manual-login quick access), in
//! which case their back button returns to the link screen instead of the
//! standby screen.

#[cfg(test)]
#[path = "scanner_test.rs"]
mod scanner_test;

/// Screens of the handheld scanner app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScannerMode {
    /// QR link / manual login entry screen.
    #[default]
    Link,
    /// Linked home listing the satellite tools.
    Standby,
    /// Product photo capture. Nothing navigates here today, but the mode
    /// is routed and keeps its own back target.
    Photo,
    Inventory,
    Price,
    Evidence,
    Location,
}

/// Scanner session: current mode plus whether the device is linked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScannerState {
    pub mode: ScannerMode,
    pub linked: bool,
}

impl ScannerState {
    /// A successful QR link lands on the standby screen.
    pub fn link(&mut self) {
        self.linked = true;
        self.mode = ScannerMode::Standby;
    }

    /// Disconnecting drops back to the link screen.
    pub fn disconnect(&mut self) {
        self.linked = false;
        self.mode = ScannerMode::Link;
    }

    pub fn open_tool(&mut self, tool: ScannerMode) {
        self.mode = tool;
    }

    /// Where the current screen's back button goes.
    pub fn back_target(&self) -> ScannerMode {
        match self.mode {
            ScannerMode::Photo => ScannerMode::Standby,
            _ if self.linked => ScannerMode::Standby,
            _ => ScannerMode::Link,
        }
    }

    pub fn go_back(&mut self) {
        self.mode = self.back_target();
    }
}
