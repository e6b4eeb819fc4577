//! What the UI layer shows when an action fails.

use std::{
    fmt,
    io::{self, IsTerminal, Write},
};

use log::error;

use crate::{
    client::ApiClient,
    error::{Error, Result},
    params::ParamChoice,
    tasks::Task,
};

pub const RESET_TAG: &str = "\x1b[0m";
pub const BOLD_TAG: &str = "\x1b[1m";
pub const RED_TAG: &str = "\x1b[91m";
pub const GREEN_TAG: &str = "\x1b[92m";
pub const YELLOW_TAG: &str = "\x1b[93m";
pub const PURPLE_TAG: &str = "\x1b[95m";
pub const CYAN_TAG: &str = "\x1b[96m";

/// A user-facing message category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    JobParamsNotChosen,
    ApiUnreachable,
    DataNotUploaded,
    Generic(String),
}

impl Notice {
    /// Picks the category for an error by its variant.
    pub fn classify(err: &Error) -> Self {
        match err {
            Error::ParamsNotChosen | Error::InvalidParamChoice(_) => Self::JobParamsNotChosen,
            Error::Unreachable { .. } => Self::ApiUnreachable,
            Error::DataNotUploaded => Self::DataNotUploaded,
            other => Self::Generic(other.to_string()),
        }
    }

    /// Warnings are expected conditions; only `Generic` is an error.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::Generic(_))
    }

    /// Sends the notice to the matching channel of `notifier`.
    pub fn deliver<N: Notifier + ?Sized>(&self, notifier: &mut N) {
        let text = self.to_string();
        if self.is_warning() {
            notifier.warning(&text);
        } else {
            notifier.error(&text);
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JobParamsNotChosen => {
                f.write_str("Unable to estimate costs. Job params not chosen yet.")
            }
            Self::ApiUnreachable => f.write_str(
                "Unable to reach AutoTrain API. Please check your internet connection.",
            ),
            Self::DataNotUploaded => {
                f.write_str("Unable to estimate costs. Data not uploaded yet.")
            }
            Self::Generic(msg) => write!(f, "An error has occurred: {msg}"),
        }
    }
}

/// Where notices end up.
pub trait Notifier {
    fn warning(&mut self, msg: &str);
    fn error(&mut self, msg: &str);
}

/// Writes notices as `warning: ...` / `error: ...` lines, coloured only when
/// the output is a terminal.
#[derive(Debug)]
pub struct TerminalNotifier<W = io::Stderr> {
    out: W,
    color: bool,
}

impl TerminalNotifier {
    pub fn stderr() -> Self {
        let out = io::stderr();
        let color = out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, tag: &str, level: &str, msg: &str) {
        // Nowhere left to report a failed notice.
        let _ = if self.color {
            writeln!(self.out, "{tag}{BOLD_TAG}{level}{RESET_TAG}: {msg}")
        } else {
            writeln!(self.out, "{level}: {msg}")
        };
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn warning(&mut self, msg: &str) {
        self.emit(YELLOW_TAG, "warning", msg);
    }

    fn error(&mut self, msg: &str) {
        self.emit(RED_TAG, "error", msg);
    }
}

/// Runs a UI action. On failure the error is logged, classified and handed
/// to `notifier`, and `None` is returned.
pub fn guarded<T, N, F>(name: &str, notifier: &mut N, action: F) -> Option<T>
where
    N: Notifier + ?Sized,
    F: FnOnce() -> Result<T>,
{
    match action() {
        Ok(value) => Some(value),
        Err(err) => {
            error!("{name} has failed due to an error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            Notice::classify(&err).deliver(notifier);
            None
        }
    }
}

/// A job still being set up in the UI. Cost estimation needs the param
/// choice and the sample count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub task: Task,
    pub param_choice: Option<ParamChoice>,
    pub num_samples: Option<u64>,
    pub num_models: u32,
}

impl JobDraft {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            param_choice: None,
            num_samples: None,
            num_models: 1,
        }
    }

    /// Quotes the draft's cost.
    ///
    /// # Errors
    /// `ParamsNotChosen` or `DataNotUploaded` before any request is sent,
    /// otherwise the errors of [`ApiClient::get_project_cost`].
    pub fn estimate_cost(&self, client: &ApiClient, username: &str, token: &str) -> Result<f64> {
        if self.param_choice.is_none() {
            return Err(Error::ParamsNotChosen);
        }
        let num_samples = self.num_samples.ok_or(Error::DataNotUploaded)?;

        client.get_project_cost(
            username,
            token,
            self.task.name(),
            num_samples,
            self.num_models,
        )
    }
}
