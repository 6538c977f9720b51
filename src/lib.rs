pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::services::quiz_service::QuizService;
use crate::storage::{JsonFileStore, QuizStore};
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub quiz_service: QuizService,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn QuizStore>) -> error::Result<Self> {
        let quiz_service = QuizService::new(store, config.answer_cooldown);
        let templates = routes::pages::load_templates()?;

        Ok(Self {
            config: Arc::new(config),
            quiz_service,
            templates: Arc::new(templates),
        })
    }

    /// State backed by the JSON file named in `config`.
    pub fn from_config(config: Config) -> error::Result<Self> {
        let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
        Self::new(config, store)
    }
}
