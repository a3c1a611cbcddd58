#![forbid(unsafe_code)]

use super::super::StoreError;

const MAX_TITLE_LEN: usize = 500;
const MAX_DESCRIPTION_LEN: usize = 10_000;

pub(crate) fn normalize_title(value: String) -> Result<String, StoreError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(StoreError::InvalidInput("title must not be empty"));
    }
    if value.len() > MAX_TITLE_LEN {
        return Err(StoreError::InvalidInput("title exceeds 500 characters"));
    }
    Ok(value)
}

pub(crate) fn normalize_description(
    value: Option<String>,
) -> Result<Option<String>, StoreError> {
    let Some(value) = value else {
        return Ok(None);
    };
    if value.len() > MAX_DESCRIPTION_LEN {
        return Err(StoreError::InvalidInput(
            "description exceeds 10000 characters",
        ));
    }
    Ok(Some(value))
}
