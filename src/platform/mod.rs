//! Platform front ends
//!
//! Handles browser/native differences for:
//! - Rendering the pads and HUD
//! - Tones
//! - Input events

#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;
#[cfg(target_arch = "wasm32")]
pub mod web;
