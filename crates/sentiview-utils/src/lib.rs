//! Shared utilities for sentiview
//!
//! Common functionality used across the sentiview workspace, currently
//! logging setup.

pub mod logging;

pub use logging::init_tracing;
