//! Tracing and observability module.
//!
//! Provides structured logging and span export for the library service.

/// Tracer configuration and initialization.
pub mod tracer;
