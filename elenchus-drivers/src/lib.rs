//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in elenchus-core that stay board-agnostic:
//!
//! - Sampled keypad (fixed-rate pacing over an electrical decoder seam)
//! - Status LED (GPIO via embedded-hal, either polarity)
//!
//! The electrical key decode itself and the display glyph handling are
//! board concerns and live with the firmware.

#![no_std]
#![deny(unsafe_code)]

pub mod keypad;
pub mod led;
