//! Board-agnostic core logic for the Elenchus diagnostic tester
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display surface, key source, clock, LED)
//! - The navigation engine (cursor-on-tree key dispatch)
//! - Selector tree definitions
//! - Action reports and the diagnostic-instance slot
//! - Engine configuration type definitions
//!
//! Diagnostic instances are heap-owned (`Box<dyn Diagnostic>`), so binaries
//! must provide a global allocator; the firmware crate does.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod diag;
pub mod engine;
pub mod keys;
pub mod report;
pub mod selector;
pub mod traits;
