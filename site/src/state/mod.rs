//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ui` for navigation/tab chrome, `contact` for
//! the form model) so individual components can depend on small focused
//! models that test natively without a browser.

pub mod contact;
pub mod ui;
