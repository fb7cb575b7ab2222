use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BobMcpError {
    #[error(
        "timeout: Bob did not respond within {timeout_secs}s. \
         Process the request file, save the response, and remove the lock file before retrying."
    )]
    ResponderTimeout { timeout_secs: u64 },

    #[error(
        "exchange busy: lock marker already present at {path}. \
         Finish or clear the previous exchange before sending a new request."
    )]
    ExchangeBusy { path: PathBuf },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BobMcpError>;
