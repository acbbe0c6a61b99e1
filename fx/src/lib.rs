//! Hero-section animation engines for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but every
//! engine is a plain state machine over locally owned state: the host Leptos
//! layer owns the timers and the animation-frame loop, calls into the engines
//! on each tick, and renders whatever they expose. Only [`render`] touches
//! the browser canvas, so the engines themselves test natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`typewriter`] | Typing/deleting/pausing role-title cycle with cursor blink |
//! | [`starfield`] | Shooting-star particle field: spawn, advance, fade, retire |
//! | [`render`] | Starfield rendering to a 2D canvas context |
//! | [`random`] | Injected random source (browser-backed or seeded for tests) |
//! | [`consts`] | Shared timing and geometry constants |

pub mod consts;
pub mod random;
pub mod render;
pub mod starfield;
pub mod typewriter;
