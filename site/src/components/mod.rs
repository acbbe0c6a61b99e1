//! Page section components, top to bottom.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
