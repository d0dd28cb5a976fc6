//! Internal test modules - whitebox tests with crate access
//!
//! This module contains tests that require internal access to crate types.
//! Tests here drive the application through the acceptance harness and read
//! its state directly.


mod acceptance_sources;
