//! Persistence for the quiz document.
//!
//! The store only knows how to load and save the whole document. Callers that
//! read, modify and write back are responsible for serializing those cycles;
//! `QuizService` does that with a single mutex.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::QuizData;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Returns the full document. A missing backing file is an empty document.
    async fn load(&self) -> Result<QuizData>;

    /// Replaces the full document.
    async fn save(&self, data: &QuizData) -> Result<()>;
}
