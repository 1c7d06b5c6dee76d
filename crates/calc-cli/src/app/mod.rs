//! Application-level utilities for the Calc CLI.
//!
//! This module provides:
//! - Path resolution for the config file and history store
//! - A context bundling CLI args with lazily-loaded config

mod context;
mod resolver;

pub use context::AppContext;
