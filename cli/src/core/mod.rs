//! # scopefs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure the access layer and the CLI build on:
//! - `assertion`: the injected expectation mechanism for assertion-style helpers
//! - `config`: configuration loading, merging and validation
//! - `error`: error types for both failure channels
//! - `types`: value types shared with the platform adapter (`FileMode`, `ByteSize`)
//!
//! ## Usage
//!
//! ```rust
//! use scopefs::core::config; // For loading configuration
//! use scopefs::core::error::{FilesystemError, FsResult}; // For error handling
//! ```
//!
pub mod assertion;
pub mod config;
pub mod error;
pub mod types;
