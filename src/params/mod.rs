pub mod catalog;
mod descriptor;
mod request;

pub use descriptor::{Constraint, DisplayHint, FieldDescriptor, FieldType};
pub use request::{FieldSet, ModelChoice, ParamChoice, TrainingRequest};
