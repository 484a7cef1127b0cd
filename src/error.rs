use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML layout error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("workbook error: {0}")]
    Workbook(String),

    /// Fixed-layout violation (missing header cell, wrong sheet count).
    /// Always fatal for the whole run.
    #[error("statement structure error: {0}")]
    Structure(String),

    /// Malformed (non-empty, non-numeric) amount text. Recovered per row;
    /// an empty amount cell is not an error, it means zero.
    #[error("row {row}: malformed {field} amount {value:?}")]
    NumericParse {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("export error: {0}")]
    Export(String),
}
