use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::Error;

/// Returned by [`get_task`] for ids the registry does not know about.
pub const UNSUPPORTED_TASK: &str = "❌ Unsupported task! Please update autonlp";

/// A kind of training job. The numeric ids are the backend's own numbering
/// and must stay in sync with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    TextBinaryClassification,
    TextMultiClassClassification,
    TextEntityExtraction,
    TextExtractiveQuestionAnswering,
    TextSummarization,
    TextSingleColumnRegression,
    TextNaturalLanguageInference,
    SpeechRecognition,
    LmTraining,
    ImageBinaryClassification,
    ImageMultiClassClassification,
    ImageSingleColumnRegression,
    Dreambooth,
    TabularBinaryClassification,
    TabularMultiClassClassification,
    TabularMultiLabelClassification,
    TabularSingleColumnRegression,
}

impl Task {
    pub const ALL: [Task; 17] = [
        Task::TextBinaryClassification,
        Task::TextMultiClassClassification,
        Task::TextEntityExtraction,
        Task::TextExtractiveQuestionAnswering,
        Task::TextSummarization,
        Task::TextSingleColumnRegression,
        Task::TextNaturalLanguageInference,
        Task::SpeechRecognition,
        Task::LmTraining,
        Task::ImageBinaryClassification,
        Task::ImageMultiClassClassification,
        Task::ImageSingleColumnRegression,
        Task::Dreambooth,
        Task::TabularBinaryClassification,
        Task::TabularMultiClassClassification,
        Task::TabularMultiLabelClassification,
        Task::TabularSingleColumnRegression,
    ];

    /// The backend's id for this task.
    pub const fn id(self) -> u32 {
        match self {
            Task::TextBinaryClassification => 1,
            Task::TextMultiClassClassification => 2,
            Task::TextEntityExtraction => 4,
            Task::TextExtractiveQuestionAnswering => 5,
            Task::TextSummarization => 8,
            Task::LmTraining => 9,
            Task::TextSingleColumnRegression => 10,
            Task::SpeechRecognition => 11,
            Task::TabularBinaryClassification => 13,
            Task::TabularMultiClassClassification => 14,
            Task::TabularMultiLabelClassification => 15,
            Task::TabularSingleColumnRegression => 16,
            Task::ImageBinaryClassification => 17,
            Task::ImageMultiClassClassification => 18,
            Task::TextNaturalLanguageInference => 22,
            Task::ImageSingleColumnRegression => 24,
            Task::Dreambooth => 25,
        }
    }

    /// The registry name of this task.
    pub const fn name(self) -> &'static str {
        match self {
            Task::TextBinaryClassification => "text_binary_classification",
            Task::TextMultiClassClassification => "text_multi_class_classification",
            Task::TextEntityExtraction => "text_entity_extraction",
            Task::TextExtractiveQuestionAnswering => "text_extractive_question_answering",
            Task::TextSummarization => "text_summarization",
            Task::TextSingleColumnRegression => "text_single_column_regression",
            Task::TextNaturalLanguageInference => "text_natural_language_inference",
            Task::SpeechRecognition => "speech_recognition",
            Task::LmTraining => "lm_training",
            Task::ImageBinaryClassification => "image_binary_classification",
            Task::ImageMultiClassClassification => "image_multi_class_classification",
            Task::ImageSingleColumnRegression => "image_single_column_regression",
            Task::Dreambooth => "dreambooth",
            Task::TabularBinaryClassification => "tabular_binary_classification",
            Task::TabularMultiClassClassification => "tabular_multi_class_classification",
            Task::TabularMultiLabelClassification => "tabular_multi_label_classification",
            Task::TabularSingleColumnRegression => "tabular_single_column_regression",
        }
    }

    /// Reverse lookup by backend id.
    pub fn from_id(id: i64) -> Option<Task> {
        Task::ALL
            .into_iter()
            .find(|task| i64::from(task.id()) == id)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Task {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::ALL
            .into_iter()
            .find(|task| task.name() == s)
            .ok_or_else(|| Error::UnknownTask(s.to_string()))
    }
}

/// Returns the task name registered under `task_id`, or [`UNSUPPORTED_TASK`]
/// when the backend knows about a task this build does not.
pub fn get_task(task_id: i64) -> &'static str {
    Task::from_id(task_id).map_or(UNSUPPORTED_TASK, Task::name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn get_task_inverts_registry() {
        for task in Task::ALL {
            assert_eq!(get_task(i64::from(task.id())), task.name());
            assert_eq!(task.name().parse::<Task>().unwrap(), task);
        }
    }

    #[test]
    fn unregistered_id_yields_sentinel() {
        assert_eq!(get_task(-1), UNSUPPORTED_TASK);
        assert_eq!(get_task(3), UNSUPPORTED_TASK);
    }

    #[test]
    fn ids_and_names_are_unique() {
        let ids: HashSet<_> = Task::ALL.iter().map(|t| t.id()).collect();
        let names: HashSet<_> = Task::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(ids.len(), Task::ALL.len());
        assert_eq!(names.len(), Task::ALL.len());
    }

    #[test]
    fn backend_numbering() {
        assert_eq!(Task::TextBinaryClassification.id(), 1);
        assert_eq!(Task::LmTraining.id(), 9);
        assert_eq!(Task::TabularMultiLabelClassification.id(), 15);
        assert_eq!(Task::Dreambooth.id(), 25);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "text_poetry".parse::<Task>().unwrap_err();
        assert!(matches!(err, Error::UnknownTask(ref name) if name == "text_poetry"));
    }
}
