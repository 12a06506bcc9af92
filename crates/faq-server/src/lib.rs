//! # FAQ Server Library
//!
//! Dependency injection wiring and the application runner for the
//! `faq-server` binary.

pub mod app;
pub mod di;
pub mod startup;
