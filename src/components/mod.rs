//! Shared UI building blocks used across role layouts.

pub mod confirm_dialog;
