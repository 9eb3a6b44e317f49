//! Configuration file loading.

pub mod loader;
pub mod types;
