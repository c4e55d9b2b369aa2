pub mod author;
pub mod book;
pub mod config;
pub mod error;
pub mod repository;
pub mod service;
pub mod tracing;

use repository::memory::MemoryLibraryRepository;
use service::LibraryService;
use std::sync::Arc;

pub fn create_library_service() -> LibraryService {
    LibraryService::new(Arc::new(MemoryLibraryRepository::new()))
}
