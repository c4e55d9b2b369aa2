//! Author management module.
//!
//! Provides author operations including:
//! - Command handlers for create and update operations
//! - Query manager for retrieving authors and their books

/// Author creation command handler.
pub mod create_author_command;

/// Author query manager for data retrieval.
pub mod query_manager;

/// Author update command handler.
pub mod update_author_command;
