//! Hyperparameter schemas and API helpers for a hosted model-training service.
//!
//! [`params::TrainingRequest`] turns a `(task, param_choice, model_choice)`
//! triple into the fields a user can configure, and [`client::ApiClient`]
//! talks to the training backend and the hub.

pub mod client;
pub mod config;
pub mod error;
pub mod languages;
pub mod params;
pub mod tasks;
pub mod ui;

pub use client::ApiClient;
pub use config::Config;
pub use error::{Error, Result};
pub use params::{FieldDescriptor, FieldSet, ModelChoice, ParamChoice, TrainingRequest};
pub use tasks::{get_task, Task};
