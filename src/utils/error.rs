use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnagramError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Unsupported operation: {op} (valid choices: {choices})")]
    UnsupportedOperation { op: String, choices: String },

    #[error("Number spelling failed for {value}: {reason}")]
    Spelling { value: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, AnagramError>;
