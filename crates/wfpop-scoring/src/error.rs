use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("failed to read input {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("input {path} is not a JSON array of records: {source}")]
    ParseInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("output path {path} must differ from the input path")]
    OutputIsInput { path: String },

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
