//! Integration test utilities for the presence engine
//!
//! This crate provides a full in-process harness: real registry and stores,
//! a call-recording auto responder, and live feature toggles.

pub mod fixtures;

pub use fixtures::*;
