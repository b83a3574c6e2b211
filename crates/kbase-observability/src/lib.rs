//! # kbase-observability
//!
//! Subscriber installation and span definitions shared by the kbase crates.

pub mod tracing_setup;

pub use tracing_setup::init_tracing;
