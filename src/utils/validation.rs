use crate::utils::error::{AnagramError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_int(field_name: &str, value: i64) -> Result<u64> {
    if value < 1 {
        return Err(AnagramError::InvalidArgument {
            message: format!("{} must be a positive integer, got {}", field_name, value),
        });
    }
    Ok(value as u64)
}
