use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("Invalid value for parameter {param}: {value}")]
    InvalidValue { param: String, value: String },
    #[error("Exceeded maximum length for parameter {param}: {value}")]
    ExceededLength { param: String, value: String },
    #[error("Invalid value for initiationMethod: {0}")]
    InvalidInitiationMethod(String),
    #[error("Invalid value for amountEditable: {0}")]
    InvalidAmountEditable(String),
    #[error("Invalid value for UEN or Phone: one of them is required")]
    MissingPayeeIdentifier,
    #[error("Data object {0} not found")]
    TagNotFound(String),
    #[error("Data object {0} holds a computed value and cannot be set")]
    ComputedTag(String),
    #[error("Data object {tag} has a {length} character value, at most 99 can be encoded")]
    ValueTooLong { tag: String, length: usize },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QrError>;
