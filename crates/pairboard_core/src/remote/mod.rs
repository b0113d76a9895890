//! Remote service boundary.
//!
//! # Responsibility
//! - Define the abstract contract the pairing-board service must satisfy.
//! - Keep transport details outside the core crate.

pub mod service;
