//! Every field descriptor the service knows about.

use super::descriptor::FieldDescriptor;
use crate::languages::SUPPORTED_LANGUAGES;

pub const LORA_R: FieldDescriptor = FieldDescriptor::int("LoRA R", 1, 100, 16).with_int_step(1);

pub const LORA_ALPHA: FieldDescriptor =
    FieldDescriptor::int("LoRA Alpha", 1, 256, 32).with_int_step(1);

pub const LORA_DROPOUT: FieldDescriptor =
    FieldDescriptor::float("LoRA Dropout", 0.0, 1.0, 0.05).with_float_step(0.01);

pub const LEARNING_RATE: FieldDescriptor =
    FieldDescriptor::float("Learning Rate", 1e-7, 1e-1, 1e-3)
        .with_float_step(1e-6)
        .with_format("%.2E");

pub const LM_LEARNING_RATE: FieldDescriptor = LEARNING_RATE.with_float_default(5e-5);

pub const OPTIMIZER: FieldDescriptor = FieldDescriptor::select(
    "Optimizer",
    &["adamw_torch", "adamw_hf", "sgd", "adafactor", "adagrad"],
    "adamw_torch",
);

pub const LM_TRAINING_TYPE: FieldDescriptor =
    FieldDescriptor::select("LM Training Type", &["generic", "chat"], "generic");

pub const SCHEDULER: FieldDescriptor =
    FieldDescriptor::select("Scheduler", &["linear", "cosine"], "linear");

pub const TRAIN_BATCH_SIZE: FieldDescriptor = FieldDescriptor::int("Train Batch Size", 1, 128, 2);

pub const LM_TRAIN_BATCH_SIZE: FieldDescriptor = TRAIN_BATCH_SIZE.with_int_default(4);

pub const EPOCHS: FieldDescriptor = FieldDescriptor::int("Epochs", 1, 1000, 10);

pub const LM_EPOCHS: FieldDescriptor = EPOCHS.with_int_default(1);

pub const PERCENTAGE_WARMUP: FieldDescriptor =
    FieldDescriptor::float("Percentage Warmup", 0.0, 1.0, 0.1);

pub const GRADIENT_ACCUMULATION_STEPS: FieldDescriptor =
    FieldDescriptor::int("Gradient Accumulation Steps", 1, 100, 1);

pub const WEIGHT_DECAY: FieldDescriptor = FieldDescriptor::float("Weight Decay", 0.0, 1.0, 0.0);

pub const SOURCE_LANGUAGE: FieldDescriptor =
    FieldDescriptor::select("Source Language", SUPPORTED_LANGUAGES, "en");

pub const TARGET_LANGUAGE: FieldDescriptor =
    FieldDescriptor::select("Target Language", SUPPORTED_LANGUAGES, "en");

/// Source language for user-supplied hub models, whose language is unknown.
pub const SOURCE_LANGUAGE_UNK: FieldDescriptor =
    FieldDescriptor::select("Source Language", &["unk"], "unk");

pub const NUM_MODELS: FieldDescriptor = FieldDescriptor::int("Number of Models", 1, 25, 1);

pub const DB_NUM_STEPS: FieldDescriptor = FieldDescriptor::int("Number of Steps", 100, 10000, 1500);

pub const DB_TEXT_ENCODER_STEPS_PERCENTAGE: FieldDescriptor =
    FieldDescriptor::int("Text encoder steps percentage", 1, 100, 30);

pub const DB_PRIOR_PRESERVATION: FieldDescriptor =
    FieldDescriptor::checkbox("Prior preservation", false);

pub const IMAGE_SIZE: FieldDescriptor = FieldDescriptor::int("Image Size", 64, 2048, 512);

pub const DREAMBOOTH_CONCEPT_TYPE: FieldDescriptor =
    FieldDescriptor::select("Concept Type", &["person", "object"], "person");

/// Every registered descriptor under its constant name, including the ones no
/// task currently selects.
pub fn all() -> [(&'static str, FieldDescriptor); 24] {
    [
        ("LORA_R", LORA_R),
        ("LORA_ALPHA", LORA_ALPHA),
        ("LORA_DROPOUT", LORA_DROPOUT),
        ("LEARNING_RATE", LEARNING_RATE),
        ("LM_LEARNING_RATE", LM_LEARNING_RATE),
        ("OPTIMIZER", OPTIMIZER),
        ("LM_TRAINING_TYPE", LM_TRAINING_TYPE),
        ("SCHEDULER", SCHEDULER),
        ("TRAIN_BATCH_SIZE", TRAIN_BATCH_SIZE),
        ("LM_TRAIN_BATCH_SIZE", LM_TRAIN_BATCH_SIZE),
        ("EPOCHS", EPOCHS),
        ("LM_EPOCHS", LM_EPOCHS),
        ("PERCENTAGE_WARMUP", PERCENTAGE_WARMUP),
        ("GRADIENT_ACCUMULATION_STEPS", GRADIENT_ACCUMULATION_STEPS),
        ("WEIGHT_DECAY", WEIGHT_DECAY),
        ("SOURCE_LANGUAGE", SOURCE_LANGUAGE),
        ("TARGET_LANGUAGE", TARGET_LANGUAGE),
        ("SOURCE_LANGUAGE_UNK", SOURCE_LANGUAGE_UNK),
        ("NUM_MODELS", NUM_MODELS),
        ("DB_NUM_STEPS", DB_NUM_STEPS),
        (
            "DB_TEXT_ENCODER_STEPS_PERCENTAGE",
            DB_TEXT_ENCODER_STEPS_PERCENTAGE,
        ),
        ("DB_PRIOR_PRESERVATION", DB_PRIOR_PRESERVATION),
        ("IMAGE_SIZE", IMAGE_SIZE),
        ("DREAMBOOTH_CONCEPT_TYPE", DREAMBOOTH_CONCEPT_TYPE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::descriptor::Constraint;

    #[test]
    fn lm_variants_only_change_defaults() {
        assert_eq!(
            LM_LEARNING_RATE.constraint,
            Constraint::Float {
                min: 1e-7,
                max: 1e-1,
                default: 5e-5,
                step: Some(1e-6)
            }
        );
        assert_eq!(LM_LEARNING_RATE.format, Some("%.2E"));
        assert_eq!(LM_LEARNING_RATE.label, LEARNING_RATE.label);

        assert!(matches!(
            LM_TRAIN_BATCH_SIZE.constraint,
            Constraint::Int { min: 1, max: 128, default: 4, step: None }
        ));
        assert!(matches!(
            LM_EPOCHS.constraint,
            Constraint::Int { min: 1, max: 1000, default: 1, step: None }
        ));
    }

    #[test]
    fn defaults_are_within_bounds() {
        for (name, field) in all() {
            match field.constraint {
                Constraint::Int { min, max, default, .. } => {
                    assert!(min <= default && default <= max, "{name}")
                }
                Constraint::Float { min, max, default, .. } => {
                    assert!(min <= default && default <= max, "{name}")
                }
                Constraint::Str { choices, default } => {
                    assert!(choices.contains(&default), "{name}")
                }
                Constraint::Bool { .. } => {}
            }
        }
    }

    #[test]
    fn unk_source_language_has_single_choice() {
        let Constraint::Str { choices, default } = SOURCE_LANGUAGE_UNK.constraint else {
            panic!("expected a select field");
        };
        assert_eq!(choices, ["unk"]);
        assert_eq!(default, "unk");
    }
}
