//! Library catalog models.
//!
//! Authors, books, their identifiers and the error taxonomy shared by the
//! catalog store and the use-case layer built on top of it.

pub mod model;
