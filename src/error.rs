#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

impl Error {
    /// True when the upstream answered with a non-2xx status, as opposed to
    /// the request never completing.
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status { .. })
    }
}

/// The persisted API key could not be read back.
#[derive(thiserror::Error, Debug)]
pub enum CredentialError {
    #[error("credential file not found ({0})")]
    NotFound(std::path::PathBuf),

    #[error("credential file {file} is malformed: no `=` in line {line}")]
    Malformed {
        file: std::path::PathBuf,
        line: usize,
    },

    #[error("no FBR_API_KEY entry in {0}")]
    Missing(std::path::PathBuf),
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({file})")]
pub struct IoError {
    file: std::path::PathBuf,
    #[source]
    source: std::io::Error,
}

impl IoError {
    pub fn new(file: std::path::PathBuf, source: std::io::Error) -> Self {
        Self { file, source }
    }
}
