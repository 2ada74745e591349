//! Simulated device facade
//!
//! This module produces the canned response payloads for the three device
//! endpoints. No real device is ever contacted; the configured endpoint is
//! a placeholder.

pub mod command;
pub mod facade;

pub use command::{CommandError, extract_command};
pub use facade::{DataSnapshot, DeviceFacade, DeviceInfo};
