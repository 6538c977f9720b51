use crate::error::Result;
use crate::models::QuizData;
use crate::storage::QuizStore;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<QuizData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> QuizData {
        self.data.lock().expect("memory store mutex poisoned").clone()
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn load(&self) -> Result<QuizData> {
        Ok(self.snapshot())
    }

    async fn save(&self, data: &QuizData) -> Result<()> {
        *self.data.lock().expect("memory store mutex poisoned") = data.clone();
        Ok(())
    }
}
