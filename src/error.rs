use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("year {0} is outside the supported range 1..=9999")]
    YearOutOfRange(i32),

    #[error("la fecha debe tener el formato AAAA-MM-DD (por ejemplo: 2021-04-02), recibido '{0}'")]
    Format(String),

    #[error("unknown province code '{0}'")]
    UnknownProvince(String),

    #[error("holiday lookup failed: {0}")]
    Lookup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HolidayError>;
