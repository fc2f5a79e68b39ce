use crate::utils::error::{LibraryError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 操作參數：空字串或只有空白都視為未提供
pub fn validate_non_empty_input(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::InvalidInput {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(LibraryError::ConfigValidationError {
                field: field_name.to_string(),
                message: format!("Duplicate entry: {}", value),
            });
        }
    }
    Ok(())
}
