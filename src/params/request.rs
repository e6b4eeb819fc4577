use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::Serialize;

use super::{catalog::*, descriptor::FieldDescriptor};
use crate::{
    error::{Error, Result},
    tasks::Task,
};

/// Parameter name to descriptor.
pub type FieldSet = BTreeMap<&'static str, FieldDescriptor>;

/// Whether hyperparameters are picked by the service or by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamChoice {
    Autotrain,
    Manual,
}

impl FromStr for ParamChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "autotrain" => Ok(Self::Autotrain),
            "manual" => Ok(Self::Manual),
            _ => Err(Error::InvalidParamChoice(s.to_string())),
        }
    }
}

impl fmt::Display for ParamChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Autotrain => "autotrain",
            Self::Manual => "manual",
        })
    }
}

/// Whether the job starts from a service-selected model or a hub model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelChoice {
    Autotrain,
    HubModel,
}

impl FromStr for ModelChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "autotrain" => Ok(Self::Autotrain),
            "hub_model" => Ok(Self::HubModel),
            _ => Err(Error::InvalidModelChoice(s.to_string())),
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Autotrain => "autotrain",
            Self::HubModel => "hub_model",
        })
    }
}

/// A validated `(task, param_choice, model_choice)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingRequest {
    pub task: Task,
    pub param_choice: ParamChoice,
    pub model_choice: ModelChoice,
}

impl TrainingRequest {
    /// Parses and validates a request.
    ///
    /// # Errors
    /// `UnknownTask`, `InvalidParamChoice` or `InvalidModelChoice`, checked in
    /// that order.
    pub fn new(task: &str, param_choice: &str, model_choice: &str) -> Result<Self> {
        Ok(Self {
            task: task.parse()?,
            param_choice: param_choice.parse()?,
            model_choice: model_choice.parse()?,
        })
    }

    /// The backend id of the request's task.
    pub fn task_id(&self) -> u32 {
        self.task.id()
    }

    /// Returns the fields a user can configure for this request.
    ///
    /// # Errors
    /// `UnsupportedTask` when the task is registered but has no catalog.
    pub fn fields(&self) -> Result<FieldSet> {
        let fields: &[(&'static str, FieldDescriptor)] = match self.task {
            Task::TextBinaryClassification
            | Task::TextMultiClassClassification
            | Task::TextEntityExtraction
            | Task::TextSingleColumnRegression
            | Task::TextNaturalLanguageInference => self.text_fields(),
            Task::TabularBinaryClassification
            | Task::TabularMultiClassClassification
            | Task::TabularSingleColumnRegression
            | Task::TabularMultiLabelClassification => &[("num_models", NUM_MODELS)],
            Task::ImageBinaryClassification | Task::ImageMultiClassClassification => {
                self.image_fields()
            }
            Task::Dreambooth => self.dreambooth_fields(),
            Task::LmTraining => self.lm_training_fields(),
            Task::TextExtractiveQuestionAnswering
            | Task::TextSummarization
            | Task::SpeechRecognition
            | Task::ImageSingleColumnRegression => {
                return Err(Error::UnsupportedTask(self.task));
            }
        };

        Ok(fields.iter().copied().collect())
    }

    fn text_fields(&self) -> &'static [(&'static str, FieldDescriptor)] {
        match (self.param_choice, self.model_choice) {
            (ParamChoice::Manual, _) => GENERIC_MANUAL,
            (ParamChoice::Autotrain, ModelChoice::Autotrain) => &[
                ("source_language", SOURCE_LANGUAGE),
                ("num_models", NUM_MODELS),
            ],
            (ParamChoice::Autotrain, ModelChoice::HubModel) => &[
                ("source_language", SOURCE_LANGUAGE_UNK),
                ("num_models", NUM_MODELS),
            ],
        }
    }

    fn image_fields(&self) -> &'static [(&'static str, FieldDescriptor)] {
        match self.param_choice {
            ParamChoice::Manual => GENERIC_MANUAL,
            ParamChoice::Autotrain => &[("num_models", NUM_MODELS)],
        }
    }

    fn dreambooth_fields(&self) -> &'static [(&'static str, FieldDescriptor)] {
        match (self.param_choice, self.model_choice) {
            (ParamChoice::Manual, _) => &[
                ("image_size", IMAGE_SIZE),
                ("learning_rate", LEARNING_RATE),
                ("train_batch_size", TRAIN_BATCH_SIZE),
                ("num_steps", DB_NUM_STEPS),
                (
                    "text_encoder_steps_percentage",
                    DB_TEXT_ENCODER_STEPS_PERCENTAGE,
                ),
                ("prior_preservation", DB_PRIOR_PRESERVATION),
            ],
            (ParamChoice::Autotrain, ModelChoice::HubModel) => {
                &[("image_size", IMAGE_SIZE), ("num_models", NUM_MODELS)]
            }
            (ParamChoice::Autotrain, ModelChoice::Autotrain) => &[("num_models", NUM_MODELS)],
        }
    }

    fn lm_training_fields(&self) -> &'static [(&'static str, FieldDescriptor)] {
        match self.param_choice {
            ParamChoice::Manual => &[
                ("learning_rate", LM_LEARNING_RATE),
                ("optimizer", OPTIMIZER),
                ("scheduler", SCHEDULER),
                ("train_batch_size", LM_TRAIN_BATCH_SIZE),
                ("num_train_epochs", LM_EPOCHS),
                ("percentage_warmup", PERCENTAGE_WARMUP),
                ("gradient_accumulation_steps", GRADIENT_ACCUMULATION_STEPS),
                ("weight_decay", WEIGHT_DECAY),
                ("lora_r", LORA_R),
                ("lora_alpha", LORA_ALPHA),
                ("lora_dropout", LORA_DROPOUT),
                ("training_type", LM_TRAINING_TYPE),
            ],
            ParamChoice::Autotrain => &[
                ("num_models", NUM_MODELS),
                ("training_type", LM_TRAINING_TYPE),
            ],
        }
    }
}

/// Manual hyperparameters shared by the text and image families.
const GENERIC_MANUAL: &[(&str, FieldDescriptor)] = &[
    ("learning_rate", LEARNING_RATE),
    ("optimizer", OPTIMIZER),
    ("scheduler", SCHEDULER),
    ("train_batch_size", TRAIN_BATCH_SIZE),
    ("num_train_epochs", EPOCHS),
    ("percentage_warmup", PERCENTAGE_WARMUP),
    ("gradient_accumulation_steps", GRADIENT_ACCUMULATION_STEPS),
    ("weight_decay", WEIGHT_DECAY),
];
