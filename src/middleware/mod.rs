//! Middleware module
//!
//! This module contains middleware applied to every update before dispatch

pub mod logging;

pub use logging::LoggingMiddleware;
