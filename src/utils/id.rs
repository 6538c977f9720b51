use uuid::Uuid;

/// Question ids are random v4 UUIDs; collisions are not checked for.
pub fn generate_question_id() -> String {
    Uuid::new_v4().to_string()
}
