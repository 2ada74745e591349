//! Devsim - HTTP facade over a simulated IoT device
//!
//! Core library for the HTTP layer and the simulated device facade.

pub mod config;
pub mod device;
pub mod http;
pub mod server;
