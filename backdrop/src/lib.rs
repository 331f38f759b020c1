//! Decorative particle backdrop for the landing page hero.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! single canvas: sizing it to its container, simulating a field of drifting
//! particles, and drawing the field with a soft radial wash and proximity
//! links every animation frame. The host crate decides when frames run
//! (pausing while the page is hidden) and when the theme changes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-owning [`engine::Engine`] and testable [`engine::EngineCore`] |
//! | [`field`] | Particle state, stepping with toroidal wrap, link detection |
//! | [`viewport`] | CSS box + pixel ratio → canvas dimensions |
//! | [`palette`] | Light/dark color pairs |
//! | [`render`] | Frame drawing against a 2D context |
//! | [`consts`] | Shared numeric constants (sizes, counts, distances) |

pub mod consts;
pub mod engine;
pub mod field;
pub mod palette;
pub mod render;
pub mod viewport;
