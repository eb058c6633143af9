//! Payroll Calculation Engine and Paid-Leave (Yukyu) Ledger
//!
//! This crate turns approved daily time records into pay for a staffing-agency
//! back office: hour classification (regular/overtime/night/holiday/sunday),
//! rate application, the deduction cascade down to net pay, and the yukyu
//! ledger that grants, consumes (LIFO), expires, and adjusts statutory
//! paid-leave balances.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
