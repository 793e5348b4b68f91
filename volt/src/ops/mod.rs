//! Core operations.
//!
//! This module contains the business logic for volt commands,
//! separated from CLI argument parsing and output rendering.

pub mod create_module;

pub use create_module::create_module;
