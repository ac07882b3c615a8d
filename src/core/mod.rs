//! Core library components.
//!
//! This module contains the change detection logic, the diff-suppression
//! adapter, and the state and settings handling around them.

pub mod config;
pub mod constants;
pub mod detector;
pub mod domain;
pub mod hasher;
pub mod plan;
pub mod schema;
pub mod state;
pub mod suppress;
pub mod types;
pub mod validation;
