//! Barcode Copier host
//!
//! Bootstrap (config, tracing, dependency wiring) and the headless command
//! line front end.

pub mod bootstrap;
pub mod cli;
