use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("chart has no records")]
    EmptyData,

    #[error("{chart} charts need at least {required} records, got {actual}")]
    InsufficientData {
        chart: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("bad condition `{0}`: expected low,high,color")]
    InvalidCondition(String),

    #[error("bad axis range `{0}`: expected min,max,step")]
    InvalidAxisRange(String),

    #[error("bad value format `{0}`")]
    InvalidFormat(String),

    #[error("unknown chart kind `{0}`")]
    UnknownChartKind(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
