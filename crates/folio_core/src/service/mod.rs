//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into use-case level APIs.
//! - Enforce cross-registry rules (a contract must link registered
//!   entities) that no single registry can check alone.

pub mod catalog;
