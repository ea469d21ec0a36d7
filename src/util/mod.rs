//! Shared utilities for the animation engine.
//!
//! Helpers for colors, easing curves, and frame pacing.

pub mod color;
pub mod easing;
pub mod frame_timing;
