//! Configuration loading and management for the payroll engine.
//!
//! This module loads the default pay period and the statutory constants from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use rol_pagos_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Reference wage: {}", config.rates().reference_wage);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, StatutoryRates};
