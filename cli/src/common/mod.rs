//! # scopefs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared, scope-unaware utilities. The access layer (`access::`) applies the
//! working root and the validation rules; everything under `common::` just
//! performs the raw operation on the path it is given.
//!
//! - **`fs`**: the `Platform` adapter and the host I/O, copy and usage primitives behind it.
//!

/// Filesystem primitives and the platform adapter.
pub mod fs;
