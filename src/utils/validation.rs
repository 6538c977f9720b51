use std::borrow::Cow;
use url::Url;
use validator::{ValidationError, ValidationErrors};

pub const IMAGE_URL_SCHEME_MESSAGE: &str =
    "Ссылка на изображение должна начинаться с http:// или https://";

/// Picks one human-readable message out of a validation failure. Fields are
/// tried in request order so the same bad payload always yields the same text.
pub fn first_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    let mut ranked: Vec<(usize, &Vec<ValidationError>)> = fields
        .iter()
        .map(|(name, errs)| (field_rank(name.as_ref()), *errs))
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);

    ranked
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Некорректные данные".to_string())
}

fn field_rank(name: &str) -> usize {
    match name {
        "question" => 0,
        "answer" => 1,
        "success_image" => 2,
        _ => 3,
    }
}

pub fn validate_image_url(raw: &str) -> Result<(), ValidationError> {
    let scheme_ok = raw.starts_with("http://") || raw.starts_with("https://");
    let parsed_ok = Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false);
    if scheme_ok && parsed_ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("image_url");
        err.message = Some(Cow::Borrowed(IMAGE_URL_SCHEME_MESSAGE));
        Err(err)
    }
}
