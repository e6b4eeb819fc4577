use std::{fmt, io};

use crate::tasks::Task;

/// The crate's result type.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors that can occur while building field sets or talking to the APIs.
#[derive(Debug)]
pub enum Error {
    /// The task name is not in the task registry.
    UnknownTask(String),
    /// `param_choice` was neither `autotrain` nor `manual`.
    InvalidParamChoice(String),
    /// `model_choice` was neither `autotrain` nor `hub_model`.
    InvalidModelChoice(String),
    /// The task is registered but has no parameter catalog.
    UnsupportedTask(Task),
    /// A cost estimate was requested before the job params were chosen.
    ParamsNotChosen,
    /// A cost estimate was requested before any data was uploaded.
    DataNotUploaded,
    /// The connection to the backend API could not be established.
    Unreachable { url: String, source: reqwest::Error },
    /// The hub identity API timed out or refused the connection.
    HubUnreachable(reqwest::Error),
    /// The hub rejected the token.
    Unauthenticated,
    /// The server answered with a non-2xx status.
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },
    /// Any other transport failure.
    Transport(reqwest::Error),
    /// The response body did not have the expected shape.
    UpstreamShape(String),
    /// Reading the local credential store failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTask(task) => write!(f, "unknown task: {task}"),
            Self::InvalidParamChoice(choice) => write!(
                f,
                "param_choice must be either autotrain or manual, got {choice:?}"
            ),
            Self::InvalidModelChoice(choice) => write!(
                f,
                "model_choice must be either autotrain or hub_model, got {choice:?}"
            ),
            Self::UnsupportedTask(task) => write!(f, "task {task} not supported"),
            Self::ParamsNotChosen => write!(f, "job params not chosen"),
            Self::DataNotUploaded => write!(f, "data not uploaded"),
            Self::Unreachable { url, .. } => write!(
                f,
                "Failed to reach AutoNLP API at {url}, check your internet connection"
            ),
            Self::HubUnreachable(_) => write!(
                f,
                "Hugging Face Hub is unreachable, please try again later."
            ),
            Self::Unauthenticated => write!(f, "invalid or expired hub token"),
            Self::HttpStatus { status, url, body } => {
                write!(f, "HTTP {status} from {url}")?;
                if !body.is_empty() {
                    write!(f, ": {body}")?;
                }
                Ok(())
            }
            Self::Transport(e) => write!(f, "request failed: {e}"),
            Self::UpstreamShape(msg) => write!(f, "unexpected response: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreachable { source, .. } => Some(source),
            Self::HubUnreachable(e) | Self::Transport(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::UpstreamShape(e.to_string())
    }
}
