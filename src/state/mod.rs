//! Shared application state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `pos`, `cart`, etc.) so each role
//! layout and screen depends on a small focused model. Everything here is
//! plain in-memory data held in `RwSignal`s; nothing is persisted.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod owner;
pub mod pos;
pub mod scanner;
pub mod session;
pub mod superadmin;
