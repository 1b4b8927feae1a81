//! Screen modules grouped by role.
//!
//! ARCHITECTURE
//! ============
//! Each role directory owns a layout component (sidebar + current-screen
//! router) and one module per feature screen. The login module is the
//! role gate's signed-out view.

pub mod login;
pub mod owner;
pub mod pos;
pub mod scanner;
pub mod superadmin;
