//! Configuration loading and types for the payroll engine.
//!
//! Rate configurations are owned by an external settings store; this module
//! provides their strongly-typed representation and a YAML loader keyed by
//! company and effective date.

mod loader;
mod types;

pub use loader::{ConfigLoader, RateSet};
pub use types::{LeavePolicy, RateConfiguration};
