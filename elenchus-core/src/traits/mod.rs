//! Hardware abstraction traits
//!
//! These traits define the interface between the navigation engine
//! and hardware-specific implementations.

pub mod display;
pub mod keypad;
pub mod led;
pub mod time;

pub use display::DisplaySurface;
pub use keypad::KeySource;
pub use led::StatusLed;
pub use time::Monotonic;
