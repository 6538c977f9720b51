pub mod answer_checker;
pub mod quiz_service;
