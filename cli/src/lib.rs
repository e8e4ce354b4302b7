//! # scopefs Library Root
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! scopefs is a sandboxed filesystem access layer for test-automation harnesses.
//! Harness code creates, inspects and asserts on files inside one isolated
//! working root; every path is resolved against that root, fixture templates are
//! protected from mutation, and multi-path operations validate all of their
//! arguments before the first side effect.
//!
//! - `access`: the access layer itself (`FileAccess`, `Scope`).
//! - `common`: host filesystem primitives and the `Platform` adapter.
//! - `core`: configuration, error types, the assertion channel, value types.
//! - `commands`: the `scopefs` command-line front end.
//!
pub mod access;
pub mod commands;
pub mod common;
pub mod core;
